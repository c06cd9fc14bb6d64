#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the Rabin-Williams signature codec
//!
//! Decoding arbitrary bytes must never panic. Anything that decodes must
//! repack to the same flag byte and the same normalized residue.

use libfuzzer_sys::fuzz_target;
use rw_primitives::sig::codec::{MIN_SIGNATURE_LEN, RESERVED_FLAG_MASK};
use rw_primitives::sig::{decode_signature, pack_signature};
use rw_primitives::RabinWilliamsError;
use rw_primitives::bigint::normalize;

fuzz_target!(|data: &[u8]| {
    match decode_signature(data) {
        Ok(decoded) => {
            assert!(data.len() >= MIN_SIGNATURE_LEN);
            assert_eq!(decoded.residue_len(), data.len() - 1);

            let packed = pack_signature(decoded.e(), decoded.f(), decoded.x())
                .expect("decoded selectors are always packable");
            assert_eq!(packed[0], data[0], "flag byte must survive a repack");
            assert_eq!(&packed[1..], normalize(&data[1..]).as_bytes());
        }
        Err(RabinWilliamsError::InvalidSignatureLength { actual, .. }) => {
            assert!(actual < MIN_SIGNATURE_LEN);
        }
        Err(RabinWilliamsError::InvalidSignatureFlags(flags)) => {
            assert_ne!(flags & RESERVED_FLAG_MASK, 0);
        }
        Err(other) => panic!("unexpected decode error: {other}"),
    }
});

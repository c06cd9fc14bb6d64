#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for Rabin-Williams verification
//!
//! Splits the input into a modulus, a message and a signature. Verification
//! must never panic, must be deterministic, must agree between the free
//! function and an explicitly keyed SHA-256 verifier, and must give the same
//! verdict in both residue modes unless x^2 mod n is zero.

use libfuzzer_sys::fuzz_target;
use rw_primitives::modular::mod_exp;
use rw_primitives::sig::{PublicKey, VerificationParams, decode_signature};
use rw_primitives::{ResidueMode, verify};
use sha2::{Sha256, Sha512};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Keep moduli small enough that the fuzzer spends its time on branches
    let modulus_len = 1 + usize::from(data[0]) % 64;
    let message_len = usize::from(data[1]) % 32;
    let rest = &data[2..];
    if rest.len() < modulus_len + message_len {
        return;
    }
    let (modulus, rest) = rest.split_at(modulus_len);
    let (message, signature) = rest.split_at(message_len);

    let first = verify(modulus, message, signature);
    let second = verify(modulus, message, signature);
    assert_eq!(first.is_ok(), second.is_ok(), "verification must be deterministic");
    if let (Ok(a), Ok(b)) = (&first, &second) {
        assert_eq!(a, b, "verification must be deterministic");
    }

    let key = PublicKey::<Sha256>::from_bytes(modulus);
    let keyed = key.verify(message, signature);
    assert_eq!(first.as_ref().ok(), keyed.as_ref().ok());

    // The residue modes only differ on n - 0, which is n or 0
    let canonical = VerificationParams { residue_mode: ResidueMode::Canonical, ..Default::default() };
    let canonical_verdict = key.verify_with(message, signature, &canonical);
    assert_eq!(keyed.is_ok(), canonical_verdict.is_ok());
    if let Ok(decoded) = decode_signature(signature) {
        if let Ok(square) = mod_exp(decoded.x(), [2u8], modulus) {
            if !square.is_zero() {
                assert_eq!(
                    keyed.as_ref().ok(),
                    canonical_verdict.as_ref().ok(),
                    "residue modes must agree when x^2 mod n is non-zero"
                );
            }
        }
    }

    // Structural checks do not depend on the digest
    let wide = PublicKey::<Sha512>::from_bytes(modulus).verify(message, signature);
    assert_eq!(keyed.is_ok(), wide.is_ok());
});

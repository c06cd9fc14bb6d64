#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the modular engine
//!
//! Results of `reduce`, `mod_mul` and `mod_exp` must stay below the modulus,
//! and the identities `x^1 = x mod n` and `x^2 = x*x mod n` must hold.

use libfuzzer_sys::fuzz_target;
use rw_primitives::modular::{mod_exp, mod_mul, mod_sub, reduce};
use rw_primitives::bigint::compare;
use rw_primitives::{ModularError, ResidueMode};
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let (base, modulus) = data[1..].split_at(split.min(data.len() - 1));
    let modulus = &modulus[..modulus.len().min(48)];

    let reduced = match reduce(base, modulus) {
        Ok(r) => r,
        Err(ModularError::ReductionFailed(_)) => {
            assert!(modulus.iter().all(|&b| b == 0), "only a zero modulus may fail");
            return;
        }
        Err(other) => panic!("unexpected reduce error: {other}"),
    };
    assert_eq!(compare(&reduced, modulus), Ordering::Less);

    let squared = mod_mul(base, base, modulus).expect("non-zero modulus");
    assert_eq!(compare(&squared, modulus), Ordering::Less);
    assert_eq!(mod_exp(base, [2u8], modulus).expect("non-zero modulus"), squared);
    assert_eq!(mod_exp(base, [1u8], modulus).expect("non-zero modulus"), reduced);

    let wrapped = mod_sub(modulus, &squared, modulus, ResidueMode::Canonical)
        .expect("non-zero modulus");
    assert_eq!(compare(&wrapped, modulus), Ordering::Less);
});

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Modular Arithmetic
//!
//! Reduction, exponentiation, multiplication and subtraction modulo a
//! [`BigInteger`], built entirely on the byte-level engine in
//! [`crate::bigint`].
//!
//! Reduction uses binary long division: the divisor is shifted so its top bit
//! lines up with the dividend's, then shifted back down one bit per round,
//! subtracting whenever it fits. The loop runs exactly
//! `bit_len(a) - bit_len(n) + 1` rounds.

use crate::bigint::{BigInteger, add, checked_sub, compare, mul, shl_bits, shr_bits, sub};
use std::cmp::Ordering;
use tracing::trace;

/// How [`mod_sub`] treats its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResidueMode {
    /// `n - a` with no final reduction: `a = 0` yields `n` itself.
    ///
    /// This matches the deployed signing protocol and is the default.
    #[default]
    Compatible,
    /// `(n - a) mod modulus`, always in `[0, modulus)`.
    Canonical,
}

/// Errors raised by the modular engine.
///
/// Both variants mean an internal invariant was violated; neither is a
/// verdict on a signature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModularError {
    /// Zero modulus, or the reduction bound ran out with the value still `>= n`.
    #[error("Modular reduction failed: {0}")]
    ReductionFailed(String),

    /// `mod_sub` was asked for `n - a` with `a > n`.
    #[error("Modular subtraction underflow: subtrahend exceeds minuend")]
    Underflow,
}

/// `a mod n`, in `[0, n)`.
///
/// # Errors
/// Returns `ModularError::ReductionFailed` if `n` is zero or the loop
/// finishes without bringing the remainder below `n`.
pub fn reduce(a: impl AsRef<[u8]>, n: impl AsRef<[u8]>) -> Result<BigInteger, ModularError> {
    let a = BigInteger::from_bytes_be(a.as_ref());
    let n = BigInteger::from_bytes_be(n.as_ref());

    if n.is_zero() {
        return Err(ModularError::ReductionFailed("modulus is zero".to_string()));
    }
    if compare(&a, &n) == Ordering::Less {
        return Ok(a);
    }

    let shift = a.bit_len().saturating_sub(n.bit_len());
    let mut divisor = shl_bits(&n, shift);
    let mut remainder = a;
    for _ in 0..=shift {
        if let Some(next) = checked_sub(&remainder, &divisor) {
            remainder = next;
        }
        divisor = shr_bits(&divisor, 1);
    }

    if compare(&remainder, &n) != Ordering::Less {
        return Err(ModularError::ReductionFailed(format!(
            "remainder still {} bits after {} rounds against a {}-bit modulus",
            remainder.bit_len(),
            shift.saturating_add(1),
            n.bit_len()
        )));
    }
    Ok(remainder)
}

/// `(a * b) mod n`.
///
/// # Errors
/// Propagates [`reduce`] failures.
pub fn mod_mul(
    a: impl AsRef<[u8]>,
    b: impl AsRef<[u8]>,
    n: impl AsRef<[u8]>,
) -> Result<BigInteger, ModularError> {
    reduce(mul(a, b), n)
}

/// `base^exponent mod n` by left-to-right square-and-multiply.
///
/// An exponent of zero yields `1 mod n`, which is zero when `n = 1`.
///
/// # Errors
/// Propagates [`reduce`] failures, including a zero modulus.
pub fn mod_exp(
    base: impl AsRef<[u8]>,
    exponent: impl AsRef<[u8]>,
    n: impl AsRef<[u8]>,
) -> Result<BigInteger, ModularError> {
    let n = n.as_ref();
    let exponent = BigInteger::from_bytes_be(exponent.as_ref());
    let base = reduce(base, n)?;

    let mut result = reduce([1u8], n)?;
    for index in (0..exponent.bit_len()).rev() {
        result = mod_mul(&result, &result, n)?;
        if exponent.bit(index) {
            result = mod_mul(&result, &base, n)?;
        }
    }
    Ok(result)
}

/// `n - a` under the rules of `mode`.
///
/// In [`ResidueMode::Compatible`] the difference is returned as is, so it may
/// equal `modulus` when `a` is zero. In [`ResidueMode::Canonical`] both
/// operands are first reduced and the result wraps into `[0, modulus)`.
///
/// # Errors
/// Returns `ModularError::Underflow` in compatible mode when `a > n`, and
/// propagates [`reduce`] failures in canonical mode.
pub fn mod_sub(
    n: impl AsRef<[u8]>,
    a: impl AsRef<[u8]>,
    modulus: impl AsRef<[u8]>,
    mode: ResidueMode,
) -> Result<BigInteger, ModularError> {
    match mode {
        ResidueMode::Compatible => checked_sub(n, a).ok_or(ModularError::Underflow),
        ResidueMode::Canonical => {
            let modulus = modulus.as_ref();
            let n = reduce(n, modulus)?;
            let a = reduce(a, modulus)?;
            let difference = match checked_sub(&n, &a) {
                Some(difference) => difference,
                None => {
                    trace!("canonical mod_sub wrapped through the modulus");
                    sub(add(&n, modulus), &a)
                }
            };
            reduce(difference, modulus)
        }
    }
}

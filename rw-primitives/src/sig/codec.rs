#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Signature Wire Format
//!
//! ```text
//! +-----------+---------------------------+
//! | flag byte | x (big-endian, 1+ bytes)  |
//! +-----------+---------------------------+
//!   bit 0: e = -1 when set, +1 when clear
//!   bit 1: f =  2 when set,  1 when clear
//!   bits 2..7: reserved, must be zero
//! ```

use crate::bigint::BigInteger;
use crate::error::{RabinWilliamsError, Result};
use tracing::instrument;

/// Flag bit selecting `e = -1`.
pub const FLAG_NEGATE: u8 = 0b01;
/// Flag bit selecting `f = 2`.
pub const FLAG_DOUBLE: u8 = 0b10;
/// Bits that must be clear in a valid flag byte.
pub const RESERVED_FLAG_MASK: u8 = !(FLAG_NEGATE | FLAG_DOUBLE);
/// Shortest well-formed signature: one flag byte and one residue byte.
pub const MIN_SIGNATURE_LEN: usize = 2;

/// A signature split into its branch selectors and residue candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSignature {
    e: i8,
    f: u8,
    x: BigInteger,
    residue_len: usize,
}

impl DecodedSignature {
    /// Assembles a decoded signature without validating the selectors.
    ///
    /// `residue_len` is taken from `x_bytes` as given, leading zeros
    /// included. The verifier treats selectors outside `{+1, -1} x {1, 2}`
    /// as a rejection rather than an error.
    #[must_use]
    pub fn from_parts(e: i8, f: u8, x_bytes: &[u8]) -> Self {
        Self { e, f, x: BigInteger::from_bytes_be(x_bytes), residue_len: x_bytes.len() }
    }

    /// Sign selector, `+1` or `-1`.
    #[must_use]
    pub fn e(&self) -> i8 {
        self.e
    }

    /// Doubling selector, `1` or `2`.
    #[must_use]
    pub fn f(&self) -> u8 {
        self.f
    }

    /// Residue candidate `x`.
    #[must_use]
    pub fn x(&self) -> &BigInteger {
        &self.x
    }

    /// Number of residue bytes as they appeared on the wire.
    #[must_use]
    pub fn residue_len(&self) -> usize {
        self.residue_len
    }
}

/// Splits a wire-format signature into `(e, f, x)`.
///
/// # Errors
/// - `InvalidSignatureLength` if `signature` is shorter than two bytes.
/// - `InvalidSignatureFlags` if any reserved flag bit is set.
#[instrument(level = "trace", skip(signature), fields(signature_len = signature.len()))]
pub fn decode_signature(signature: &[u8]) -> Result<DecodedSignature> {
    let (flags, residue) = match signature {
        [flags, residue @ ..] if !residue.is_empty() => (*flags, residue),
        _ => {
            return Err(RabinWilliamsError::InvalidSignatureLength {
                expected: MIN_SIGNATURE_LEN,
                actual: signature.len(),
            });
        }
    };

    if flags & RESERVED_FLAG_MASK != 0 {
        return Err(RabinWilliamsError::InvalidSignatureFlags(flags));
    }

    let e = if flags & FLAG_NEGATE == 0 { 1 } else { -1 };
    let f = if flags & FLAG_DOUBLE == 0 { 1 } else { 2 };
    Ok(DecodedSignature::from_parts(e, f, residue))
}

/// Encodes `(e, f, x)` as `[flag] || normalized(x)`.
///
/// # Errors
/// Returns `InvalidBranch` if `e` is not `+1`/`-1` or `f` is not `1`/`2`.
pub fn pack_signature(e: i8, f: u8, x: &BigInteger) -> Result<Vec<u8>> {
    let negate = match e {
        1 => 0,
        -1 => FLAG_NEGATE,
        _ => return Err(RabinWilliamsError::InvalidBranch { e, f }),
    };
    let double = match f {
        1 => 0,
        2 => FLAG_DOUBLE,
        _ => return Err(RabinWilliamsError::InvalidBranch { e, f }),
    };

    let mut out = Vec::with_capacity(x.len() + 1);
    out.push(negate | double);
    out.extend_from_slice(x.as_bytes());
    Ok(out)
}

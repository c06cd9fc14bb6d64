#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Arbitrary-Precision Unsigned Integers
//!
//! A [`BigInteger`] is a non-negative integer stored as big-endian bytes,
//! most significant byte first, with no sign bit.
//!
//! ## Representation
//!
//! ```text
//! X = Σ b_i × 256^(len-1-i) for i = 0..len
//! ```
//!
//! The stored form is always normalized: no leading zero byte unless the
//! value is zero, in which case it is exactly one zero byte. Because of this
//! invariant, byte equality is value equality and the derived `Eq`/`Hash`
//! agree with [`compare`].
//!
//! The arithmetic engine in [`arithmetic`] accepts any byte slice (normalized
//! or not) and always returns a normalized `BigInteger`.

pub mod arithmetic;

pub use arithmetic::{
    add, checked_sub, compare, div_by_two, increment, mul, normalize, shl_bits, shr_bits, sub,
};

use std::cmp::Ordering;
use std::fmt;

/// Non-negative integer in normalized big-endian byte form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    bytes: Vec<u8>,
}

impl BigInteger {
    /// The value zero (`[0x00]`).
    #[must_use]
    pub fn zero() -> Self {
        Self { bytes: vec![0] }
    }

    /// The value one (`[0x01]`).
    #[must_use]
    pub fn one() -> Self {
        Self { bytes: vec![1] }
    }

    /// Builds a value from a machine integer.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        normalize(value.to_be_bytes())
    }

    /// Builds a value from big-endian bytes, stripping leading zeros.
    ///
    /// An empty slice is read as zero.
    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        normalize(bytes)
    }

    /// Wraps bytes that are already known to be normalized.
    pub(crate) fn from_normalized(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty());
        debug_assert!(bytes.len() == 1 || bytes.first() != Some(&0));
        Self { bytes }
    }

    /// Normalized big-endian bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the value and returns its normalized big-endian bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length of the normalized encoding in bytes (1 for zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: the normalized encoding holds at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Returns true if the value is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.bytes.last().is_some_and(|&b| b & 1 == 1)
    }

    /// Number of significant bits (0 for zero).
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self.bytes.first() {
            Some(&top) if top != 0 => {
                let top_bits = 8 - top.leading_zeros() as usize;
                (self.bytes.len() - 1) * 8 + top_bits
            }
            _ => 0,
        }
    }

    /// Value of bit `index`, counting from the least significant bit.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        let byte_from_end = index / 8;
        self.bytes
            .len()
            .checked_sub(byte_from_end + 1)
            .and_then(|pos| self.bytes.get(pos))
            .is_some_and(|&b| (b >> (index % 8)) & 1 == 1)
    }

    /// Left-pads the encoding with zero bytes to exactly `width` bytes.
    ///
    /// Returns `None` if the normalized value does not fit in `width` bytes.
    #[must_use]
    pub fn to_padded_be(&self, width: usize) -> Option<Vec<u8>> {
        let pad = width.checked_sub(self.bytes.len())?;
        let mut out = vec![0u8; pad];
        out.extend_from_slice(&self.bytes);
        Some(out)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl AsRef<[u8]> for BigInteger {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<&[u8]> for BigInteger {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes_be(bytes)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger(0x{})", hex::encode(&self.bytes))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.bytes))
    }
}

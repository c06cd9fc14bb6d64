#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: Byte-level carry and borrow propagation.
// Every digit operation is widened to u16/i16 before combining, and every
// index is bounded by the operand lengths computed at the top of each function.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_possible_truncation)]

//! Big-integer arithmetic engine.
//!
//! All functions take big-endian byte slices (normalized or not) and return a
//! normalized [`BigInteger`]. Digits are bytes; carries and borrows travel
//! from the least significant byte (the end of the slice) to the most
//! significant byte (the start).

use super::BigInteger;
use std::cmp::Ordering;

/// Byte at position `i` counted from the least significant end, or zero
/// past the top of the operand.
fn digit(bytes: &[u8], i: usize) -> u8 {
    bytes.len().checked_sub(i + 1).and_then(|pos| bytes.get(pos)).copied().unwrap_or(0)
}

/// Leading-zero-free view of `bytes`; empty for zero.
fn significant(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Strips leading zero bytes; an all-zero or empty input becomes `[0x00]`.
#[must_use]
pub fn normalize(a: impl AsRef<[u8]>) -> BigInteger {
    let trimmed = significant(a.as_ref());
    if trimmed.is_empty() {
        BigInteger::zero()
    } else {
        BigInteger::from_normalized(trimmed.to_vec())
    }
}

/// Three-way comparison of two magnitudes.
///
/// Both operands are normalized first: the shorter one is less, and equal
/// lengths compare byte by byte from the most significant byte.
#[must_use]
pub fn compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    let a = significant(a.as_ref());
    let b = significant(b.as_ref());
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `a + b` with carry propagation.
///
/// The raw result is `max(len(a), len(b)) + 1` bytes wide before
/// normalization.
#[must_use]
pub fn add(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> BigInteger {
    let (a, b) = (a.as_ref(), b.as_ref());
    let width = a.len().max(b.len()) + 1;
    let mut out = vec![0u8; width];
    let mut carry = 0u16;
    for i in 0..width {
        let sum = u16::from(digit(a, i)) + u16::from(digit(b, i)) + carry;
        out[width - 1 - i] = (sum & 0xff) as u8;
        carry = sum >> 8;
    }
    normalize(out)
}

/// `a + 1`.
#[must_use]
pub fn increment(a: impl AsRef<[u8]>) -> BigInteger {
    add(a, [1u8])
}

/// `a - b`, borrowing 256 from the next byte when a digit runs short.
///
/// The caller must guarantee `a >= b`. There is no underflow detection: if
/// the precondition is violated the result is `a - b` modulo `256^width`,
/// which is meaningless as an integer. Debug builds assert the precondition.
/// Use [`checked_sub`] when the ordering is not known.
#[must_use]
pub fn sub(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> BigInteger {
    let (a, b) = (a.as_ref(), b.as_ref());
    let width = a.len().max(b.len());
    let mut out = vec![0u8; width];
    let mut borrow = 0i16;
    for i in 0..width {
        let mut d = i16::from(digit(a, i)) - i16::from(digit(b, i)) - borrow;
        if d < 0 {
            d += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[width - 1 - i] = d as u8;
    }
    debug_assert_eq!(borrow, 0, "sub called with minuend smaller than subtrahend");
    normalize(out)
}

/// `a - b`, or `None` when `a < b`.
#[must_use]
pub fn checked_sub(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Option<BigInteger> {
    let (a, b) = (a.as_ref(), b.as_ref());
    if compare(a, b) == Ordering::Less {
        None
    } else {
        Some(sub(a, b))
    }
}

/// Schoolbook product, one byte of each operand at a time.
///
/// Runs in `O(len(a) * len(b))`.
#[must_use]
pub fn mul(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> BigInteger {
    let a = significant(a.as_ref());
    let b = significant(b.as_ref());
    if a.is_empty() || b.is_empty() {
        return BigInteger::zero();
    }

    // Accumulate little-endian; w[i + j] collects a_i * b_j.
    let (m, n) = (a.len(), b.len());
    let mut w = vec![0u8; m + n];
    for (i, &a_i) in a.iter().rev().enumerate() {
        let mut k = 0u16;
        for (j, &b_j) in b.iter().rev().enumerate() {
            // 255 * 255 + 255 + 255 = 65535 fits in u16.
            let t = u16::from(a_i) * u16::from(b_j) + u16::from(w[i + j]) + k;
            w[i + j] = (t & 0xff) as u8;
            k = t >> 8;
        }
        w[i + n] = k as u8;
    }
    w.reverse();
    normalize(w)
}

/// `floor(a / 2)`.
///
/// Walks from the most significant byte down, shifting in the low bit of the
/// byte above. An odd remainder is discarded.
#[must_use]
pub fn div_by_two(a: impl AsRef<[u8]>) -> BigInteger {
    let a = a.as_ref();
    let mut out = Vec::with_capacity(a.len());
    let mut carry = 0u8;
    for &byte in a {
        out.push((byte >> 1) | (carry << 7));
        carry = byte & 1;
    }
    normalize(out)
}

/// `a * 2^bits`.
#[must_use]
pub fn shl_bits(a: impl AsRef<[u8]>, bits: usize) -> BigInteger {
    let a = significant(a.as_ref());
    if a.is_empty() {
        return BigInteger::zero();
    }
    let (byte_shift, bit_shift) = (bits / 8, (bits % 8) as u32);

    let mut out = Vec::with_capacity(a.len() + byte_shift + 1);
    if bit_shift == 0 {
        out.extend_from_slice(a);
    } else {
        out.push(a[0] >> (8 - bit_shift));
        for (pos, &byte) in a.iter().enumerate() {
            let low = a.get(pos + 1).map_or(0, |&next| next >> (8 - bit_shift));
            out.push((byte << bit_shift) | low);
        }
    }
    out.resize(out.len() + byte_shift, 0);
    normalize(out)
}

/// `floor(a / 2^bits)`.
#[must_use]
pub fn shr_bits(a: impl AsRef<[u8]>, bits: usize) -> BigInteger {
    let a = significant(a.as_ref());
    let (byte_shift, bit_shift) = (bits / 8, (bits % 8) as u32);
    let keep = a.len().saturating_sub(byte_shift);
    let a = &a[..keep];
    if bit_shift == 0 {
        return normalize(a);
    }

    let mut out = Vec::with_capacity(keep);
    let mut above = 0u8;
    for &byte in a {
        out.push((byte >> bit_shift) | (above << (8 - bit_shift)));
        above = byte;
    }
    normalize(out)
}

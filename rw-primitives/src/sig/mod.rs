#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Rabin-Williams Signatures
//!
//! A Rabin-Williams signature on message `m` under modulus `n = p * q`
//! (`p = 3 mod 8`, `q = 7 mod 8`) is a tweaked square root: the signer finds
//! `e in {+1, -1}`, `f in {1, 2}` and `x` such that
//!
//! ```text
//! e * f * H(m) = x^2  (mod n)
//! ```
//!
//! The verifier only needs `n`. It squares `x` and undoes the tweak:
//!
//! | e  | f | result                                |
//! |----|---|---------------------------------------|
//! | +1 | 1 | `x^2 mod n`                           |
//! | +1 | 2 | `x^2 * (n+1)/2 mod n`                 |
//! | -1 | 1 | `n - (x^2 mod n)`                     |
//! | -1 | 2 | `(n - (x^2 mod n)) * (n+1)/2 mod n`   |
//!
//! and accepts when the result equals `H(m)` once padded to the digest
//! width.
//!
//! ## Example
//!
//! ```no_run
//! use rw_primitives::sig::{PublicKey, VerificationParams};
//! use rw_primitives::ResidueMode;
//! use sha2::Sha512;
//!
//! let modulus = hex::decode("a005660c...")?;
//! let key = PublicKey::<Sha512>::from_bytes(&modulus);
//! let params = VerificationParams { residue_mode: ResidueMode::Canonical, ..Default::default() };
//! let valid = key.verify_with(b"Hello, World!", &[0x02, 0x8d], &params)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`codec`]: flag byte and residue wire format
//! - [`verifier`]: the verification state machine and [`PublicKey`]

pub mod codec;
pub mod verifier;

pub use codec::{DecodedSignature, FLAG_DOUBLE, FLAG_NEGATE, decode_signature, pack_signature};
pub use verifier::{
    MAX_RESIDUE_LEN, PublicKey, RejectReason, VerificationParams, Verdict, apply_branch,
    half_modulus, verify,
};

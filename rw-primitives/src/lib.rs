#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Rabin-Williams Primitives
//!
//! Arbitrary-precision arithmetic and Rabin-Williams signature verification
//! over big-endian byte strings.
//!
//! Everything in this crate is a pure function of its inputs. There is no
//! global state, no I/O and no interior mutability, so any number of
//! verifications may run concurrently on separate threads.
//!
//! ## Modules
//!
//! - **bigint**: `BigInteger` (normalized big-endian magnitude) and the
//!   arithmetic engine: add, subtract, schoolbook multiply, halve, compare,
//!   normalize, increment and bit shifts
//! - **modular**: reduction by binary long division, square-and-multiply
//!   exponentiation, modular multiplication and subtraction
//! - **hash**: message digests through any `sha2::Digest` implementation
//!   (SHA-256 by default)
//! - **sig**: signature codec and the four-branch verifier
//!
//! ## Example
//!
//! ```no_run
//! use rw_primitives::sig::verify;
//!
//! let modulus = hex::decode("a005660c...")?;
//! let signature = hex::decode("0084b617...")?;
//! let valid = verify(&modulus, b"Hello, World!", &signature)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bigint;
pub mod error;
pub mod hash;
pub mod modular;
pub mod sig;

pub use bigint::BigInteger;
pub use error::{RabinWilliamsError, Result};
pub use modular::{ModularError, ResidueMode};
pub use sig::{
    DecodedSignature, PublicKey, RejectReason, VerificationParams, Verdict, decode_signature,
    pack_signature, verify,
};

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Message Digests
//!
//! The verifier treats the hash function as an opaque fixed-width digest.
//! Any `sha2::Digest` implementation can be plugged in; SHA-256 is the
//! default.

pub mod sha2;

pub use self::sha2::{DefaultDigest, digest_len, digest_message, sha256, sha512};

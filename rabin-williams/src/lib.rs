#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Rabin-Williams - Signature Verification
//!
//! Verifies Rabin-Williams signatures over SHA-2 message digests. A signature
//! is a one-byte header selecting a tweak `(e, f)` followed by the big-endian
//! square root `x`; it is valid when `e · f · x² mod n` reproduces the digest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rabin_williams::{VerifierConfig, load_public_key, load_signature, verify_rabin_williams_with_key};
//!
//! let key = load_public_key("public_key.hex")?;
//! let signature = load_signature("signature.hex")?;
//!
//! let config = VerifierConfig::for_production();
//! if verify_rabin_williams_with_key(b"Hello, World!", &signature, &key, &config)? {
//!     println!("Signature is valid");
//! }
//! # Ok::<(), rabin_williams::CoreError>(())
//! ```
//!
//! ## Low-Level Verification
//!
//! The primitives take no configuration and apply the protocol defaults:
//!
//! ```rust,no_run
//! use rabin_williams::rw_primitives::sig::PublicKey;
//! use sha2::Sha512;
//!
//! # let (modulus, signature) = (vec![0u8; 128], vec![0u8; 129]);
//! let key = PublicKey::<Sha512>::from_bytes(&modulus);
//! let valid = key.verify(b"message", &signature)?;
//! # Ok::<(), rabin_williams::RabinWilliamsError>(())
//! ```
//!
//! ## Crates
//!
//! - [`rw_primitives`]: arithmetic engine, codec and verifier
//! - [`rw_core`]: configuration, logging and the convenience API
//!
//! The `rw-verify` binary in this crate wraps the convenience API.

pub use rw_core;
pub use rw_primitives;

pub use rw_core::{
    CoreError, Result, VERSION, VerifierConfig, decode_hex, load_public_key, load_signature,
    verify_rabin_williams, verify_rabin_williams_hex, verify_rabin_williams_with_key,
};
pub use rw_primitives::{
    BigInteger, DecodedSignature, PublicKey, RabinWilliamsError, ResidueMode, VerificationParams,
    Verdict, decode_signature, pack_signature, verify,
};

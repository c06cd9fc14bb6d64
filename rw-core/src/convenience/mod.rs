//! Convenience API for Rabin-Williams verification
//!
//! High-level entry points that take raw bytes, hex text or key files and a
//! [`VerifierConfig`](crate::config::VerifierConfig).
//!
//! ```rust,no_run
//! use rw_core::{VerifierConfig, load_public_key, load_signature, verify_rabin_williams_with_key};
//!
//! let key = load_public_key("key.hex")?;
//! let signature = load_signature("sig.hex")?;
//! let config = VerifierConfig::for_production();
//! let valid = verify_rabin_williams_with_key(b"Hello, World!", &signature, &key, &config)?;
//! # Ok::<(), rw_core::CoreError>(())
//! ```

mod encoding;
mod rabin_williams;

pub use encoding::{decode_hex, load_public_key, load_signature};
pub use rabin_williams::{
    verify_rabin_williams, verify_rabin_williams_hex, verify_rabin_williams_with_key,
};

//! # Rabin-Williams Core
//!
//! Configuration, structured logging and a convenience verification API on
//! top of `rw-primitives`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rw_core::{VerifierConfig, verify_rabin_williams_hex};
//!
//! let config = VerifierConfig::for_production();
//! let valid = verify_rabin_williams_hex(
//!     b"Hello, World!",
//!     "0082...",
//!     "a005660c...",
//!     &config,
//! )?;
//! println!("valid: {valid}");
//! # Ok::<(), rw_core::CoreError>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`]: [`VerifierConfig`] builder and validation
//! - [`convenience`]: byte, hex and file based verification
//! - [`error`]: [`CoreError`] and the crate [`Result`] alias
//! - [`logging`]: subscriber setup, correlation IDs, input sanitization

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod convenience;
pub mod error;
pub mod logging;

pub use config::VerifierConfig;
pub use convenience::{
    decode_hex, load_public_key, load_signature, verify_rabin_williams, verify_rabin_williams_hex,
    verify_rabin_williams_with_key,
};
pub use error::{CoreError, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

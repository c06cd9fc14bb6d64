//! Error types for rw-core operations.
//!
//! Wraps the primitives' structural errors and adds the failure modes of the
//! outer layers: input decoding, key policy, configuration and file I/O.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use rw_primitives::RabinWilliamsError;
use thiserror::Error;

/// Errors that can occur in rw-core operations.
///
/// A signature that is well-formed but does not verify is not an error; the
/// convenience API reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input could not be decoded or exceeds a configured limit.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The public key is unusable under the active configuration.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Reading a key or signature file failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The signature is malformed or the modular engine failed.
    #[error(transparent)]
    RabinWilliams(#[from] RabinWilliamsError),
}

/// Result type for rw-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

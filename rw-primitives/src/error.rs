//! Error types for rw-primitives crate.

use crate::modular::ModularError;

/// Errors that can occur while decoding or verifying a Rabin-Williams signature.
///
/// Only structural problems and arithmetic invariant violations are errors.
/// A well-formed signature that does not match the message is reported as
/// `Ok(false)` by the verifier, never through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RabinWilliamsError {
    /// The signature is too short to hold a flag byte and a residue.
    #[error("Invalid signature length: expected at least {expected} bytes, got {actual}")]
    InvalidSignatureLength {
        /// Minimum signature length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The flag byte has bits set outside the two branch selector bits.
    #[error("Invalid signature flags: 0x{0:02x} has reserved bits set")]
    InvalidSignatureFlags(u8),

    /// A branch selector pair outside `{+1, -1} x {1, 2}` was supplied for encoding.
    #[error("Invalid branch selector: e={e}, f={f}")]
    InvalidBranch {
        /// Sign selector.
        e: i8,
        /// Doubling selector.
        f: u8,
    },

    /// Modular arithmetic failed an internal invariant.
    #[error("Arithmetic failure: {0}")]
    Arithmetic(#[from] ModularError),
}

/// Result type alias for rw-primitives operations.
pub type Result<T> = std::result::Result<T, RabinWilliamsError>;

//! Verifier configuration.
//!
//! A single builder-style struct controls how the convenience API and the
//! `rw-verify` tool run the primitives' verifier.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use rw_primitives::ResidueMode;
use rw_primitives::sig::{MAX_RESIDUE_LEN, VerificationParams};

use crate::error::{CoreError, Result};

/// Default cap on the message size hashed by the convenience API (1 GB).
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1_000_000_000;

/// Smallest modulus accepted by [`VerifierConfig::for_production`].
pub const PRODUCTION_MIN_MODULUS_BITS: usize = 1024;

/// Settings for Rabin-Williams verification.
///
/// # Examples
/// ```rust
/// use rw_core::config::VerifierConfig;
/// use rw_primitives::ResidueMode;
///
/// let config = VerifierConfig::new()
///     .with_residue_mode(ResidueMode::Canonical)
///     .with_max_residue_len(256)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.verification_params().max_residue_len, 256);
///
/// // Rejects keys under 1024 bits
/// let prod = VerifierConfig::for_production();
/// assert_eq!(prod.min_modulus_bits, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// How `n - x^2` is computed on the negated branches.
    ///
    /// Default: `ResidueMode::Compatible`
    pub residue_mode: ResidueMode,

    /// Longest accepted residue in bytes.
    ///
    /// Default: 128
    pub max_residue_len: usize,

    /// Smallest accepted modulus in bits. Zero disables the check.
    ///
    /// Default: 0
    pub min_modulus_bits: usize,

    /// Largest message the convenience API will hash.
    ///
    /// Default: 1 GB
    pub max_message_len: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            residue_mode: ResidueMode::Compatible,
            max_residue_len: MAX_RESIDUE_LEN,
            min_modulus_bits: 0,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

impl VerifierConfig {
    /// Create a configuration with the protocol defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a permissive configuration for development.
    ///
    /// Accepts any modulus size and residues up to 512 bytes so that small
    /// test keys and 4096-bit keys both work.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_min_modulus_bits(0).with_max_residue_len(512)
    }

    /// Create a configuration for production.
    ///
    /// Requires at least a 1024-bit modulus.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_min_modulus_bits(PRODUCTION_MIN_MODULUS_BITS)
    }

    /// Set the residue mode and return self for method chaining.
    #[must_use]
    pub fn with_residue_mode(mut self, mode: ResidueMode) -> Self {
        self.residue_mode = mode;
        self
    }

    /// Set the residue length bound and return self for method chaining.
    #[must_use]
    pub fn with_max_residue_len(mut self, len: usize) -> Self {
        self.max_residue_len = len;
        self
    }

    /// Set the minimum modulus size and return self for method chaining.
    #[must_use]
    pub fn with_min_modulus_bits(mut self, bits: usize) -> Self {
        self.min_modulus_bits = bits;
        self
    }

    /// Set the message size cap and return self for method chaining.
    #[must_use]
    pub fn with_max_message_len(mut self, len: usize) -> Self {
        self.max_message_len = len;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails; see [`VerifierConfig::validate`].
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_residue_len` is zero
    /// - `max_message_len` is zero
    /// - `min_modulus_bits` is larger than any residue allowed by
    ///   `max_residue_len` could cover
    pub fn validate(&self) -> Result<()> {
        if self.max_residue_len == 0 {
            return Err(CoreError::ConfigurationError(
                "max_residue_len must be at least 1 byte".to_string(),
            ));
        }

        if self.max_message_len == 0 {
            return Err(CoreError::ConfigurationError(
                "max_message_len must be at least 1 byte".to_string(),
            ));
        }

        let residue_bits = self.max_residue_len.saturating_mul(8);
        if self.min_modulus_bits > residue_bits {
            return Err(CoreError::ConfigurationError(format!(
                "min_modulus_bits ({}) exceeds what a {}-byte residue can cover ({} bits)",
                self.min_modulus_bits, self.max_residue_len, residue_bits
            )));
        }

        Ok(())
    }

    /// The primitives-level parameters for this configuration.
    #[must_use]
    pub fn verification_params(&self) -> VerificationParams {
        VerificationParams {
            residue_mode: self.residue_mode,
            max_residue_len: self.max_residue_len,
        }
    }
}

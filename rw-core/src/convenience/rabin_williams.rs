//! Configured Rabin-Williams verification.
//!
//! Adds key policy, message size limits, hex input and operation logging on
//! top of [`rw_primitives::sig::PublicKey::verify_with`].

use rw_primitives::sig::PublicKey;
use tracing::{debug, instrument};

use crate::config::VerifierConfig;
use crate::convenience::encoding::{check_modulus_shape, decode_hex};
use crate::error::{CoreError, Result};
use crate::logging::sanitize_bytes;

fn check_policy(message: &[u8], key: &PublicKey, config: &VerifierConfig) -> Result<()> {
    config.validate()?;

    if message.len() > config.max_message_len {
        return Err(CoreError::InvalidInput(format!(
            "message is {} bytes, limit is {}",
            message.len(),
            config.max_message_len
        )));
    }

    check_modulus_shape(key)?;

    let bits = key.modulus().bit_len();
    if bits < config.min_modulus_bits {
        return Err(CoreError::InvalidKey(format!(
            "modulus is {bits} bits, at least {} required",
            config.min_modulus_bits
        )));
    }
    Ok(())
}

/// Verify a Rabin-Williams signature against an already loaded key.
///
/// # Errors
///
/// - `CoreError::ConfigurationError` if `config` does not validate
/// - `CoreError::InvalidInput` if the message exceeds `max_message_len`
/// - `CoreError::InvalidKey` if the modulus is zero, even, or smaller than
///   `min_modulus_bits`
/// - `CoreError::RabinWilliams` for malformed signatures
///
/// A well-formed signature that does not match returns `Ok(false)`.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        message_len = message.len(),
        signature = %sanitize_bytes(signature),
        modulus_bits = key.modulus().bit_len()
    )
)]
pub fn verify_rabin_williams_with_key(
    message: &[u8],
    signature: &[u8],
    key: &PublicKey,
    config: &VerifierConfig,
) -> Result<bool> {
    crate::log_crypto_operation_start!(
        "rw_verify",
        message_len = message.len(),
        signature_len = signature.len()
    );

    if let Err(err) = check_policy(message, key, config) {
        crate::log_crypto_operation_error!("rw_verify", err);
        return Err(err);
    }

    let valid = key.verify_with(message, signature, &config.verification_params()).map_err(|e| {
        let err = CoreError::from(e);
        crate::log_crypto_operation_error!("rw_verify", err);
        err
    })?;

    crate::log_crypto_operation_complete!("rw_verify", valid = valid);
    debug!(valid, "Rabin-Williams verification completed");
    Ok(valid)
}

/// Verify a Rabin-Williams signature under a big-endian modulus.
///
/// # Example
///
/// ```rust,no_run
/// use rw_core::{VerifierConfig, verify_rabin_williams};
///
/// # let (modulus, signature) = (vec![0x0f], vec![0x00, 0x02]);
/// let valid = verify_rabin_williams(b"Hello, World!", &signature, &modulus, &VerifierConfig::default())?;
/// # Ok::<(), rw_core::CoreError>(())
/// ```
///
/// # Errors
///
/// Same as [`verify_rabin_williams_with_key`].
pub fn verify_rabin_williams(
    message: &[u8],
    signature: &[u8],
    modulus: &[u8],
    config: &VerifierConfig,
) -> Result<bool> {
    let key: PublicKey = PublicKey::from_bytes(modulus);
    verify_rabin_williams_with_key(message, signature, &key, config)
}

/// Verify with the signature and modulus given as hex text.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if either hex string fails to decode,
/// otherwise the same as [`verify_rabin_williams_with_key`].
pub fn verify_rabin_williams_hex(
    message: &[u8],
    signature_hex: &str,
    modulus_hex: &str,
    config: &VerifierConfig,
) -> Result<bool> {
    let signature = decode_hex(signature_hex, "signature")?;
    let modulus = decode_hex(modulus_hex, "modulus")?;
    verify_rabin_williams(message, &signature, &modulus, config)
}

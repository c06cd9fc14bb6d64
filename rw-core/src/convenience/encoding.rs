//! Hex decoding and key/signature file loading.

use std::path::Path;

use rw_primitives::sig::PublicKey;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::logging::sanitize_bytes;

/// Decode hex text, ignoring surrounding and embedded ASCII whitespace and an
/// optional `0x` prefix.
///
/// `what` names the input in error messages.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if the text is empty or not valid hex.
pub fn decode_hex(text: &str, what: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    if digits.is_empty() {
        return Err(CoreError::InvalidInput(format!("{what} is empty")));
    }

    hex::decode(digits).map_err(|e| CoreError::InvalidInput(format!("{what} is not valid hex: {e}")))
}

/// Read a public key file holding the hex-encoded modulus `n`.
///
/// # Errors
///
/// - `CoreError::IoError` if the file cannot be read
/// - `CoreError::InvalidInput` if it does not hold hex
/// - `CoreError::InvalidKey` if the modulus is zero or even
pub fn load_public_key(path: impl AsRef<Path>) -> Result<PublicKey> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let modulus = decode_hex(&text, "public key")?;
    let key: PublicKey = PublicKey::from_bytes(&modulus);
    check_modulus_shape(&key)?;
    debug!(path = %path.display(), modulus_bits = key.modulus().bit_len(), "Loaded public key");
    Ok(key)
}

/// Read a signature file holding the hex-encoded packed signature.
///
/// The bytes are returned undecoded; structural checks happen at
/// verification time.
///
/// # Errors
///
/// - `CoreError::IoError` if the file cannot be read
/// - `CoreError::InvalidInput` if it does not hold hex
pub fn load_signature(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let signature = decode_hex(&text, "signature")?;
    debug!(path = %path.display(), signature = %sanitize_bytes(&signature), "Loaded signature");
    Ok(signature)
}

/// Reject moduli that cannot belong to a Rabin-Williams key.
pub(crate) fn check_modulus_shape(key: &PublicKey) -> Result<()> {
    let n = key.modulus();
    if n.is_zero() {
        return Err(CoreError::InvalidKey("modulus is zero".to_string()));
    }
    if !n.is_odd() {
        return Err(CoreError::InvalidKey("modulus must be odd".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_hex_variants() {
        assert_eq!(decode_hex("0a0B", "x").unwrap(), vec![0x0A, 0x0B]);
        assert_eq!(decode_hex("  0x0a0b\n", "x").unwrap(), vec![0x0A, 0x0B]);
        assert_eq!(decode_hex("0a\n0b\r\n", "x").unwrap(), vec![0x0A, 0x0B]);
    }

    #[test]
    fn test_decode_hex_errors() {
        assert!(matches!(decode_hex("", "signature"), Err(CoreError::InvalidInput(m)) if m.contains("signature is empty")));
        assert!(matches!(decode_hex("0x", "x"), Err(CoreError::InvalidInput(_))));
        assert!(matches!(decode_hex("abc", "x"), Err(CoreError::InvalidInput(_))));
        assert!(matches!(decode_hex("zz", "x"), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_load_public_key_rejects_bad_moduli() {
        for (contents, expect_key_error) in [("00\n", true), ("0e", true), ("xyz", false)] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            let result = load_public_key(file.path());
            if expect_key_error {
                assert!(matches!(result, Err(CoreError::InvalidKey(_))), "{contents:?}");
            } else {
                assert!(matches!(result, Err(CoreError::InvalidInput(_))), "{contents:?}");
            }
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.hex");
        assert!(matches!(load_signature(&missing), Err(CoreError::IoError(_))));
        assert!(matches!(load_public_key(&missing), Err(CoreError::IoError(_))));
    }

    #[test]
    fn test_load_signature_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  0102ff  ").unwrap();
        assert_eq!(load_signature(file.path()).unwrap(), vec![0x01, 0x02, 0xFF]);
    }
}

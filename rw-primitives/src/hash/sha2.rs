#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SHA-2 Digest Adapter
//!
//! Thin wrappers over the `sha2` crate that hand the verifier a plain byte
//! vector of the digest's native width.

use sha2::{Digest, Sha256, Sha512};
use tracing::instrument;

/// Digest used when a key does not name one.
pub type DefaultDigest = Sha256;

/// Output width of `D` in bytes (32 for SHA-256, 64 for SHA-512).
#[must_use]
pub fn digest_len<D: Digest>() -> usize {
    <D as Digest>::output_size()
}

/// Hashes `message` with `D`.
#[instrument(level = "trace", skip(message), fields(message_len = message.len()))]
#[must_use]
pub fn digest_message<D: Digest>(message: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(message);
    hasher.finalize().to_vec()
}

/// SHA-256 of `message`.
#[must_use]
pub fn sha256(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// SHA-512 of `message`.
#[must_use]
pub fn sha512(message: &[u8]) -> [u8; 64] {
    Sha512::digest(message).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;

    #[test]
    fn test_digest_len() {
        assert_eq!(digest_len::<Sha256>(), 32);
        assert_eq!(digest_len::<Sha512>(), 64);
        assert_eq!(digest_len::<DefaultDigest>(), 32);
    }

    #[test]
    fn test_sha256_empty() {
        // NIST test vector for empty input
        let expected = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
            0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
            0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(sha256(b""), expected);
        assert_eq!(digest_message::<Sha256>(b""), expected.to_vec());
    }

    #[test]
    fn test_sha256_abc() {
        let expected = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(digest_message::<DefaultDigest>(b"abc"), expected.to_vec());
    }

    #[test]
    fn test_sha512_abc() {
        let digest = digest_message::<Sha512>(b"abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest[..4], [0xdd, 0xaf, 0x35, 0xa1]);
        assert_eq!(digest[60..], [0xa5, 0x4c, 0xa4, 0x9f]);
        assert_eq!(sha512(b"abc").to_vec(), digest);
    }

    #[test]
    fn test_multi_block_is_deterministic() {
        let input = vec![b'a'; 150];
        assert_eq!(digest_message::<Sha256>(&input), digest_message::<Sha256>(&input));
        assert_ne!(digest_message::<Sha256>(&input), digest_message::<Sha256>(&input[..149]));
    }
}

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Four-Branch Rabin-Williams Verifier
//!
//! Verification walks a fixed sequence of states:
//!
//! ```text
//! Start -> ComputeSquare -> SelectBranch -> Compare -> Accept | Reject
//! ```
//!
//! - **Start**: the residue must be 1 to `max_residue_len` bytes on the wire.
//! - **ComputeSquare**: `x^2 mod n`.
//! - **SelectBranch**: undo the signer's tweak according to `(e, f)`.
//! - **Compare**: the branch result, left-padded to the digest width, must
//!   equal the message digest byte for byte.
//!
//! Every rejection along the way is a [`Verdict::Reject`], never an error.
//! Errors are reserved for malformed signatures and arithmetic invariant
//! violations.

use std::fmt;
use std::marker::PhantomData;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, trace};

use crate::bigint::{BigInteger, div_by_two, increment};
use crate::error::Result;
use crate::hash::{digest_len, digest_message};
use crate::modular::{ResidueMode, mod_exp, mod_mul, mod_sub};
use crate::sig::codec::{DecodedSignature, decode_signature};

/// Longest residue accepted by default, in bytes (a 1024-bit modulus).
pub const MAX_RESIDUE_LEN: usize = 128;

/// Tunables for a single verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationParams {
    /// How the negated branches compute `n - x^2`.
    pub residue_mode: ResidueMode,
    /// Upper bound on the residue length in bytes.
    pub max_residue_len: usize,
}

impl Default for VerificationParams {
    fn default() -> Self {
        Self { residue_mode: ResidueMode::Compatible, max_residue_len: MAX_RESIDUE_LEN }
    }
}

/// The transform selected by `(e, f)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    /// `(+1, 1)`
    Identity,
    /// `(+1, 2)`
    Halved,
    /// `(-1, 1)`
    Negated,
    /// `(-1, 2)`
    NegatedHalved,
}

impl Branch {
    fn from_selectors(e: i8, f: u8) -> Option<Self> {
        match (e, f) {
            (1, 1) => Some(Self::Identity),
            (1, 2) => Some(Self::Halved),
            (-1, 1) => Some(Self::Negated),
            (-1, 2) => Some(Self::NegatedHalved),
            _ => None,
        }
    }
}

/// Why a signature was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The residue was empty or longer than `max_residue_len`.
    ResidueLength {
        /// Residue length on the wire.
        actual: usize,
        /// Configured bound.
        max: usize,
    },
    /// `(e, f)` is not one of the four defined branches.
    UnknownBranch {
        /// Sign selector.
        e: i8,
        /// Doubling selector.
        f: u8,
    },
    /// The branch result is wider than the digest.
    ResultTooWide {
        /// Normalized result width in bytes.
        actual: usize,
        /// Digest width in bytes.
        digest_len: usize,
    },
    /// The branch result does not match the message digest.
    DigestMismatch,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResidueLength { actual, max } => {
                write!(f, "residue length {actual} outside 1..={max}")
            }
            Self::UnknownBranch { e, f: sel } => write!(f, "unknown branch e={e}, f={sel}"),
            Self::ResultTooWide { actual, digest_len } => {
                write!(f, "result is {actual} bytes, digest is {digest_len}")
            }
            Self::DigestMismatch => write!(f, "digest mismatch"),
        }
    }
}

/// Outcome of the verification state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The signature matches the message.
    Accept,
    /// The signature does not match the message.
    Reject(RejectReason),
}

impl Verdict {
    /// Returns true for [`Verdict::Accept`].
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// `(n + 1) / 2`, the inverse of two modulo an odd `n`.
#[must_use]
pub fn half_modulus(n: &BigInteger) -> BigInteger {
    div_by_two(increment(n))
}

/// Applies the `(e, f)` transform to `x_squared`.
///
/// `half` must be `(n + 1) / 2`. Returns `Ok(None)` for selectors outside the
/// four defined branches.
///
/// # Errors
/// Propagates modular engine failures (zero modulus, or a compatible-mode
/// subtraction with `x_squared > n`).
pub fn apply_branch(
    x_squared: &BigInteger,
    e: i8,
    f: u8,
    n: &BigInteger,
    half: &BigInteger,
    mode: ResidueMode,
) -> Result<Option<BigInteger>> {
    let Some(branch) = Branch::from_selectors(e, f) else {
        return Ok(None);
    };

    let result = match branch {
        Branch::Identity => x_squared.clone(),
        Branch::Halved => mod_mul(x_squared, half, n)?,
        Branch::Negated => mod_sub(n, x_squared, n, mode)?,
        Branch::NegatedHalved => mod_mul(mod_sub(n, x_squared, n, mode)?, half, n)?,
    };
    Ok(Some(result))
}

/// A Rabin-Williams public key: the modulus `n` and the digest it signs.
///
/// The key is immutable once built and caches `(n + 1) / 2`.
pub struct PublicKey<D: Digest = Sha256> {
    n: BigInteger,
    half: BigInteger,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> Clone for PublicKey<D> {
    fn clone(&self) -> Self {
        Self { n: self.n.clone(), half: self.half.clone(), _digest: PhantomData }
    }
}

impl<D: Digest> fmt::Debug for PublicKey<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.n.bit_len())
            .field("digest_len", &digest_len::<D>())
            .finish()
    }
}

impl<D: Digest> PublicKey<D> {
    /// Builds a key from its modulus.
    #[must_use]
    pub fn from_modulus(n: BigInteger) -> Self {
        let half = half_modulus(&n);
        Self { n, half, _digest: PhantomData }
    }

    /// Builds a key from big-endian modulus bytes.
    #[must_use]
    pub fn from_bytes(modulus: &[u8]) -> Self {
        Self::from_modulus(BigInteger::from_bytes_be(modulus))
    }

    /// The modulus `n`.
    #[must_use]
    pub fn modulus(&self) -> &BigInteger {
        &self.n
    }

    /// Width of the digest this key verifies against.
    #[must_use]
    pub fn digest_len(&self) -> usize {
        digest_len::<D>()
    }

    /// Runs the verification state machine and reports how it ended.
    ///
    /// # Errors
    /// Returns `RabinWilliamsError::Arithmetic` if the modular engine hits an
    /// invariant violation, e.g. a zero modulus.
    #[instrument(
        level = "debug",
        skip(self, message, signature),
        fields(
            modulus_bits = self.n.bit_len(),
            message_len = message.len(),
            residue_len = signature.residue_len()
        )
    )]
    pub fn evaluate(
        &self,
        message: &[u8],
        signature: &DecodedSignature,
        params: &VerificationParams,
    ) -> Result<Verdict> {
        trace!(state = "start", e = signature.e(), f = signature.f());
        let residue_len = signature.residue_len();
        if residue_len == 0 || residue_len > params.max_residue_len {
            return Ok(self.finish(Verdict::Reject(RejectReason::ResidueLength {
                actual: residue_len,
                max: params.max_residue_len,
            })));
        }

        trace!(state = "compute_square");
        let x_squared = mod_exp(signature.x(), [2u8], &self.n)?;

        trace!(state = "select_branch");
        let Some(result) = apply_branch(
            &x_squared,
            signature.e(),
            signature.f(),
            &self.n,
            &self.half,
            params.residue_mode,
        )?
        else {
            return Ok(self.finish(Verdict::Reject(RejectReason::UnknownBranch {
                e: signature.e(),
                f: signature.f(),
            })));
        };

        trace!(state = "compare");
        let width = digest_len::<D>();
        let Some(padded) = result.to_padded_be(width) else {
            return Ok(self.finish(Verdict::Reject(RejectReason::ResultTooWide {
                actual: result.len(),
                digest_len: width,
            })));
        };

        let digest = digest_message::<D>(message);
        let verdict = if bool::from(padded.ct_eq(&digest)) {
            Verdict::Accept
        } else {
            Verdict::Reject(RejectReason::DigestMismatch)
        };
        Ok(self.finish(verdict))
    }

    /// Verifies with default parameters.
    ///
    /// # Errors
    /// Returns an error if the signature is structurally malformed or the
    /// modular engine fails. A well-formed signature that does not match
    /// yields `Ok(false)`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        self.verify_with(message, signature, &VerificationParams::default())
    }

    /// Verifies with explicit parameters.
    ///
    /// # Errors
    /// Same as [`PublicKey::verify`].
    pub fn verify_with(
        &self,
        message: &[u8],
        signature: &[u8],
        params: &VerificationParams,
    ) -> Result<bool> {
        let decoded = decode_signature(signature)?;
        Ok(self.evaluate(message, &decoded, params)?.is_accept())
    }

    fn finish(&self, verdict: Verdict) -> Verdict {
        match verdict {
            Verdict::Accept => debug!("signature accepted"),
            Verdict::Reject(reason) => debug!(%reason, "signature rejected"),
        }
        verdict
    }
}

/// Verifies `signature` over `message` under `modulus` with SHA-256 and
/// default parameters.
///
/// # Errors
/// Returns an error for structurally malformed signatures and modular engine
/// failures. Returns `Ok(false)` for every well-formed signature that does
/// not verify.
pub fn verify(modulus: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    PublicKey::<Sha256>::from_bytes(modulus).verify(message, signature)
}

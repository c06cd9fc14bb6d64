//! # Rabin-Williams Logging Utilities
//!
//! Structured logging for the verification API built on `tracing`.
//!
//! - Inputs are never logged raw: [`sanitize_bytes`] reduces them to a length
//!   and, for anything over 32 bytes, a short SHA-256 fingerprint.
//! - A thread-local correlation ID ties together the events of one request.
//!   The `log_crypto_operation_*` macros attach it automatically.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rw_core::logging::{CorrelationGuard, init_tracing, sanitize_bytes};
//!
//! // Sets the global subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let _guard = CorrelationGuard::new();
//! let signature = vec![0u8; 129];
//! tracing::info!(signature = %sanitize_bytes(&signature), "verifying");
//! ```

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use sha2::{Digest, Sha256};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,rw_core=info,rw_primitives=info";

// ============================================================================
// Correlation IDs
// ============================================================================

thread_local! {
    static CORRELATION_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

static CORRELATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a UUID v4 correlation ID.
///
/// ```rust
/// use rw_core::logging::generate_correlation_id;
///
/// assert_eq!(generate_correlation_id().len(), 36);
/// ```
#[must_use]
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a counter-based correlation ID of the form `corr-{counter:016x}`.
///
/// Cheaper than a UUID but only unique within the process.
#[must_use]
pub fn generate_lightweight_correlation_id() -> String {
    let counter = CORRELATION_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("corr-{counter:016x}")
}

/// Set the correlation ID for the current thread.
pub fn set_correlation_id(id: impl Into<String>) {
    CORRELATION_ID.with(|cell| {
        *cell.borrow_mut() = Some(id.into());
    });
}

/// The current thread's correlation ID, if set.
#[must_use]
pub fn current_correlation_id() -> Option<String> {
    CORRELATION_ID.with(|cell| cell.borrow().clone())
}

/// Clear the correlation ID for the current thread.
pub fn clear_correlation_id() {
    CORRELATION_ID.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Run `f` with `id` as the correlation ID, restoring the previous one after.
///
/// ```rust
/// use rw_core::logging::{current_correlation_id, with_correlation_id};
///
/// let seen = with_correlation_id("req-7", current_correlation_id);
/// assert_eq!(seen.as_deref(), Some("req-7"));
/// assert_eq!(current_correlation_id(), None);
/// ```
pub fn with_correlation_id<F, R>(id: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CorrelationGuard::with_id(id);
    f()
}

/// RAII guard that sets a correlation ID and restores the previous one on drop.
///
/// ```rust
/// use rw_core::logging::{CorrelationGuard, current_correlation_id};
///
/// {
///     let guard = CorrelationGuard::new();
///     assert!(guard.id().is_some());
/// }
/// assert_eq!(current_correlation_id(), None);
/// ```
pub struct CorrelationGuard {
    previous: Option<String>,
}

impl CorrelationGuard {
    /// Open a scope with a fresh UUID v4 correlation ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(generate_correlation_id())
    }

    /// Open a scope with the given correlation ID.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        let previous = current_correlation_id();
        set_correlation_id(id);
        Self { previous }
    }

    /// Open a scope with a counter-based correlation ID.
    #[must_use]
    pub fn lightweight() -> Self {
        Self::with_id(generate_lightweight_correlation_id())
    }

    /// The correlation ID currently in effect.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        current_correlation_id()
    }

    /// The correlation ID that will be restored on drop.
    #[must_use]
    pub fn previous_id(&self) -> Option<&String> {
        self.previous.as_ref()
    }
}

impl Drop for CorrelationGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(id) => set_correlation_id(id),
            None => clear_correlation_id(),
        }
    }
}

impl Default for CorrelationGuard {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Sanitization
// ============================================================================

/// Safe representation of bytes for log output.
///
/// Data up to 32 bytes shows only its length. Longer data also shows the
/// first 8 bytes of its SHA-256 as a fingerprint, so two log lines about the
/// same signature can be matched without revealing it.
///
/// ```rust
/// use rw_core::logging::sanitize_bytes;
///
/// assert_eq!(sanitize_bytes(&[1, 2, 3]), "[3 bytes]");
/// let long = sanitize_bytes(&[0u8; 129]);
/// assert!(long.starts_with("[129 bytes, fingerprint: "));
/// ```
#[must_use]
pub fn sanitize_bytes(data: &[u8]) -> String {
    if data.len() <= 32 {
        format!("[{} bytes]", data.len())
    } else {
        let digest = Sha256::digest(data);
        let fingerprint = digest.get(..8).map_or_else(|| hex::encode(digest), hex::encode);
        format!("[{} bytes, fingerprint: {}]", data.len(), fingerprint)
    }
}

// ============================================================================
// Subscriber setup
// ============================================================================

/// Install a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_FILTER`] when `RUST_LOG` is unset or invalid.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing_with_default(DEFAULT_FILTER)
}

/// Like [`init_tracing`] with a caller-chosen fallback filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing_with_default(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("Rabin-Williams logging initialized");
    Ok(())
}

// ============================================================================
// Operation macros
// ============================================================================

/// Log the start of a verification step at TRACE level.
///
/// Tags the event with target `crypto::operation` and the current
/// correlation ID when one is set.
#[macro_export]
macro_rules! log_crypto_operation_start {
    ($op:expr $(, $($field:tt)*)?) => {
        if let Some(corr_id) = $crate::logging::current_correlation_id() {
            tracing::trace!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                phase = "start",
                $($($field)*)?
            );
        } else {
            tracing::trace!(
                target: "crypto::operation",
                operation = $op,
                phase = "start",
                $($($field)*)?
            );
        }
    };
}

/// Log the completion of a verification step at TRACE level.
#[macro_export]
macro_rules! log_crypto_operation_complete {
    ($op:expr $(, $($field:tt)*)?) => {
        if let Some(corr_id) = $crate::logging::current_correlation_id() {
            tracing::trace!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                phase = "complete",
                $($($field)*)?
            );
        } else {
            tracing::trace!(
                target: "crypto::operation",
                operation = $op,
                phase = "complete",
                $($($field)*)?
            );
        }
    };
}

/// Log a failed verification step at ERROR level.
#[macro_export]
macro_rules! log_crypto_operation_error {
    ($op:expr, $error:expr $(, $($field:tt)*)?) => {
        if let Some(corr_id) = $crate::logging::current_correlation_id() {
            tracing::error!(
                target: "crypto::operation",
                correlation_id = %corr_id,
                operation = $op,
                error = %$error,
                phase = "error",
                $($($field)*)?
            );
        } else {
            tracing::error!(
                target: "crypto::operation",
                operation = $op,
                error = %$error,
                phase = "error",
                $($($field)*)?
            );
        }
    };
}

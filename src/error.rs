//! Error types for rigcheck operations.
//!
//! Check evaluation itself never produces errors: a probe that fails for
//! any reason reports its target as absent. [`RigcheckError`] covers the
//! small surface that can genuinely fail: I/O on output streams and
//! rendering the JSON report.

use thiserror::Error;

/// Core error type for rigcheck operations.
#[derive(Debug, Error)]
pub enum RigcheckError {
    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render the JSON report.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rigcheck operations.
pub type Result<T> = std::result::Result<T, RigcheckError>;

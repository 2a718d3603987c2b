//! Error types for the Vela engine.
//!
//! All crates return `VelaResult<T>` from fallible operations.
//! Numeric edge cases inside the per-tick loops (degenerate springs,
//! zero-length normal accumulations) are handled by branch-and-skip
//! and never surface here.

use thiserror::Error;

/// Unified error type for the Vela engine.
#[derive(Debug, Error)]
pub enum VelaError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated (e.g., non-finite state detected).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, VelaError>`.
pub type VelaResult<T> = Result<T, VelaError>;

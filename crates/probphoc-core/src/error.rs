//! Error types for probabilistic PHOC scoring

use thiserror::Error;

/// Main error type for scoring operations.
///
/// Every variant is raised before any score is computed, so a failed call
/// never leaves a partially written output behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhocError {
    /// Input is not a dense row-major matrix, or the column counts disagree
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Requested scorer name is not registered
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Output storage could not be shaped into one dense block.
    ///
    /// This signals a broken buffer contract in the caller, not bad input data.
    #[error("Output buffer invariant violated, this is a bug: {0}")]
    AllocationInvariantViolation(String),
}

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, PhocError>;

//! Error types and exit codes for sqf
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid configuration, unreadable journal)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args, reported by clap (2)
    Usage = 2,
    /// Data error - invalid configuration, unreadable journal (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can cross the core's public boundary
///
/// Per-document front matter problems are not represented here; they are
/// collapsed to empty metadata before aggregation.
#[derive(Error, Debug)]
pub enum SqfError {
    // Data errors (exit code 3)
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid entry glob {pattern:?}: {reason}")]
    InvalidGlob { pattern: String, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SqfError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SqfError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SqfError::InvalidConfig { .. } | SqfError::InvalidGlob { .. } => ExitCode::Data,

            SqfError::FailedOperationWithTarget { .. } | SqfError::Other(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for sqf operations
pub type Result<T> = std::result::Result<T, SqfError>;

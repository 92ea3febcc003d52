//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success (an unreachable search result is still success)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing node/edge, malformed graph description)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node/edge, malformed description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or random-walk)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found: {label}")]
    NodeNotFound { label: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid graph description at line {line}: {reason}")]
    InvalidDot { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrellisError::UnknownFormat(_)
            | TrellisError::UnknownAlgorithm(_)
            | TrellisError::UsageError(_) => ExitCode::Usage,

            TrellisError::NodeNotFound { .. }
            | TrellisError::EdgeNotFound { .. }
            | TrellisError::InvalidDot { .. } => ExitCode::Data,

            TrellisError::Io(_) | TrellisError::Json(_) | TrellisError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UnknownFormat(_) => "unknown_format",
            TrellisError::UnknownAlgorithm(_) => "unknown_algorithm",
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::NodeNotFound { .. } => "node_not_found",
            TrellisError::EdgeNotFound { .. } => "edge_not_found",
            TrellisError::InvalidDot { .. } => "invalid_dot",
            TrellisError::Io(_) => "io_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;

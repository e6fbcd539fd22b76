//! Error types and exit codes for ratgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, network, empty collection)
//! - 2: Usage error (bad flags/args, over-long leaderboard request)
//! - 3: Data error (missing vertex, malformed record or export file)

mod macros;

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
    /// Data error - missing vertex, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ratgraph operations
#[derive(Error, Debug)]
pub enum RatError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("requested {requested} ranks but only {available} distinct scores exist")]
    IndexOutOfRange { requested: usize, available: usize },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("invalid export file on line {line}: {reason}")]
    InvalidTgf { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("{operation} failed: collection is empty")]
    EmptyCollection { operation: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RatError {
    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RatError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RatError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation on an empty queue or stack
    pub fn empty_collection(operation: &str) -> Self {
        RatError::EmptyCollection {
            operation: operation.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RatError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed HTTP request
    pub fn network(url: &str, error: impl std::fmt::Display) -> Self {
        RatError::Network {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RatError::UnknownFormat(_)
            | RatError::UsageError(_)
            | RatError::InvalidValue { .. }
            | RatError::IndexOutOfRange { .. } => ExitCode::Usage,

            RatError::NotFound { .. }
            | RatError::InvalidRecord { .. }
            | RatError::InvalidTgf { .. } => ExitCode::Data,

            RatError::EmptyCollection { .. }
            | RatError::Io(_)
            | RatError::Json(_)
            | RatError::Toml(_)
            | RatError::Network { .. }
            | RatError::FailedOperationWithTarget { .. }
            | RatError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RatError::UnknownFormat(_) => "unknown_format",
            RatError::UsageError(_) => "usage_error",
            RatError::InvalidValue { .. } => "invalid_value",
            RatError::IndexOutOfRange { .. } => "index_out_of_range",
            RatError::NotFound { .. } => "not_found",
            RatError::InvalidRecord { .. } => "invalid_record",
            RatError::InvalidTgf { .. } => "invalid_tgf",
            RatError::EmptyCollection { .. } => "empty_collection",
            RatError::Io(_) => "io_error",
            RatError::Json(_) => "json_error",
            RatError::Toml(_) => "toml_error",
            RatError::Network { .. } => "network_failure",
            RatError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RatError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": i32::from(self.exit_code()),
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ratgraph operations
pub type Result<T> = std::result::Result<T, RatError>;

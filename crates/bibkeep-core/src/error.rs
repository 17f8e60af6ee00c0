//! Error types and exit codes for bibkeep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing entry, malformed document, bad input record)

use thiserror::Error;

/// Exit codes reported by the bibkeep binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing entry, malformed document, bad input record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during bibkeep operations
#[derive(Error, Debug)]
pub enum BibError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("entry not found for URL pattern: {pattern}")]
    EntryNotFound { pattern: String },

    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    #[error("input record {index} has no url")]
    MissingUrl { index: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl BibError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            BibError::UnknownFormat(_) | BibError::DuplicateFormat | BibError::UsageError(_) => {
                ExitCode::Usage
            }

            // Data errors
            BibError::EntryNotFound { .. }
            | BibError::MalformedDocument { .. }
            | BibError::MissingUrl { .. } => ExitCode::Data,

            // Generic failures
            BibError::Io(_) | BibError::Json(_) | BibError::Toml(_) | BibError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BibError::UnknownFormat(_) => "unknown_format",
            BibError::DuplicateFormat => "duplicate_format",
            BibError::UsageError(_) => "usage_error",
            BibError::EntryNotFound { .. } => "entry_not_found",
            BibError::MalformedDocument { .. } => "malformed_document",
            BibError::MissingUrl { .. } => "missing_url",
            BibError::Io(_) => "io_error",
            BibError::Json(_) => "json_error",
            BibError::Toml(_) => "toml_error",
            BibError::Other(_) => "other",
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
}

/// Result type alias for bibkeep operations
pub type Result<T> = std::result::Result<T, BibError>;

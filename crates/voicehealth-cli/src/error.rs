//! Error types and handling for the CLI
//!
//! Invalid documents are not errors: they are reported through the
//! validation verdict. Everything here is a usage or runtime failure and
//! exits with [`EXIT_RUNTIME`].

use std::io;
use std::path::PathBuf;

/// Exit code for a valid document
pub const EXIT_VALID: i32 = 0;
/// Exit code when at least one document is invalid
pub const EXIT_INVALID: i32 = 1;
/// Exit code for usage and runtime errors
pub const EXIT_RUNTIME: i32 = 2;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (reading input, writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Nothing to validate
    #[error("No input provided on {origin}")]
    EmptyInput { origin: String },

    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input exceeds the configured size cap
    #[error("Input exceeds the limit of {limit} bytes")]
    InputTooLarge { limit: u64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_RUNTIME
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

//! CLI-specific error types
//!
//! All CLI errors are fatal: they print to stderr and the process
//! exits non-zero.

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (stdin/stdout, socket)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store bring-up or statement failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }
}

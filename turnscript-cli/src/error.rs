//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Transcript file not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Rendering error from core
    RenderError(String),
    /// Output could not be written
    OutputError(String),
    /// System clipboard unavailable or rejected the content
    ClipboardError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RenderError(msg) => write!(f, "Rendering error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
            CliError::ClipboardError(msg) => write!(f, "Clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<turnscript_core::RenderError> for CliError {
    fn from(err: turnscript_core::RenderError) -> Self {
        CliError::RenderError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

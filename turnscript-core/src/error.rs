//! Core error types
//!
//! Segmentation itself is total; these errors only cover building the
//! per-speaker matchers, reading from a line source and template expansion.

use thiserror::Error;

/// Errors raised while preparing or feeding the segmenter
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The marker pattern for a speaker could not be compiled
    #[error("invalid marker pattern for speaker '{speaker}': {source}")]
    Pattern {
        /// The configured speaker name
        speaker: String,
        /// Underlying regex failure
        #[source]
        source: regex::Error,
    },

    /// Reading the transcript stream failed
    #[error("I/O error while reading transcript: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while rendering entries to HTML
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template expansion failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

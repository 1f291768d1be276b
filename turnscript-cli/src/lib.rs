//! turnscript CLI library
//!
//! Command-line plumbing around `turnscript-core`: configuration, transcript
//! input, output formats and the file and clipboard sinks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod sink;

pub use error::{CliError, CliResult};

//! Destinations for rendered transcripts

pub mod clipboard;
pub mod file;

pub use clipboard::copy_to_clipboard;
pub use file::{write_output, OutputTarget};

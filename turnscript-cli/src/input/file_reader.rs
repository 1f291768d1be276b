//! Transcript file reading

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use turnscript_core::{Entry, Segmenter};

/// Opens transcript files and feeds them to the segmenter line by line
pub struct FileReader;

impl FileReader {
    /// Open a transcript for buffered line reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Segment a transcript file
    ///
    /// The file is read to the end before any entry is returned.
    pub fn read_entries(path: &Path, segmenter: &Segmenter) -> Result<Vec<Entry>> {
        let reader = Self::open(path)?;
        let entries = segmenter
            .segment_reader(reader)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::info!(
            "Segmented {} into {} entries",
            path.display(),
            entries.len()
        );

        Ok(entries)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

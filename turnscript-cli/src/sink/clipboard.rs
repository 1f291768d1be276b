//! Clipboard sink
//!
//! Copies rendered transcripts to the system clipboard.

use crate::error::CliError;
use arboard::Clipboard;

/// Copy text to the clipboard
///
/// Blank content is skipped rather than clearing the clipboard.
pub fn copy_to_clipboard(content: &str) -> Result<(), CliError> {
    if content.trim().is_empty() {
        log::info!("Nothing to copy to clipboard (empty transcript)");
        return Ok(());
    }

    let mut clipboard = Clipboard::new()
        .map_err(|e| CliError::ClipboardError(format!("failed to initialize clipboard: {e}")))?;
    clipboard
        .set_text(content)
        .map_err(|e| CliError::ClipboardError(format!("failed to copy transcript: {e}")))?;

    log::info!("Transcript copied to clipboard ({} chars)", content.len());
    Ok(())
}

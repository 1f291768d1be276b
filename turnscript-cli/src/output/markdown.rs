//! Markdown output formatter

use super::{FormattedOutput, OutputFormatter};
use anyhow::Result;
use std::fmt::Write;
use turnscript_core::Entry;

/// Markdown formatter - one heading per speaker turn
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<FormattedOutput> {
        let mut out = String::new();

        for entry in entries {
            if !entry.is_unattributed() {
                writeln!(out, "### {} ({})", entry.speaker, entry.timestamp)?;
                writeln!(out)?;
            }
            for paragraph in &entry.paragraphs {
                writeln!(out, "{paragraph}")?;
                writeln!(out)?;
            }
        }

        Ok(FormattedOutput::same(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_layout() {
        let entries = vec![
            Entry::unattributed(vec!["Recorded live.".to_string()]),
            Entry {
                speaker: "Alice".to_string(),
                timestamp: "0:01".to_string(),
                paragraphs: vec!["Hi.".to_string(), "Welcome.".to_string()],
            },
        ];

        let output = MarkdownFormatter.format_entries(&entries).unwrap();
        assert_eq!(
            output.body,
            "Recorded live.\n\n### Alice (0:01)\n\nHi.\n\nWelcome.\n\n"
        );
    }

    #[test]
    fn test_empty_transcript() {
        let output = MarkdownFormatter.format_entries(&[Entry::default()]).unwrap();
        assert_eq!(output.body, "");
    }
}

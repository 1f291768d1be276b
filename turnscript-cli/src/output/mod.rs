//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use turnscript_core::{Entry, HtmlRenderer, SpeakerConfig};

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Rendered transcript ready for the sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// Content written to the output file
    pub body: String,
    /// Content copied to the clipboard
    pub clipboard: String,
}

impl FormattedOutput {
    /// Output whose clipboard text equals its body
    pub fn same(body: String) -> Self {
        Self {
            clipboard: body.clone(),
            body,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format all entries of a transcript
    fn format_entries(&self, entries: &[Entry]) -> Result<FormattedOutput>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML page; the clipboard receives the transcript fragment
    #[default]
    Html,
    /// HTML transcript fragment only
    Fragment,
    /// JSON array of entries
    Json,
    /// Markdown with one heading per speaker turn
    Markdown,
}

impl OutputFormat {
    /// All formats in display order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Html,
        OutputFormat::Fragment,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Fragment => "fragment",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "Standalone HTML page (clipboard gets the fragment)",
            OutputFormat::Fragment => "HTML transcript fragment",
            OutputFormat::Json => "JSON array of speaker entries",
            OutputFormat::Markdown => "Markdown with a heading per speaker turn",
        }
    }

    /// Build the formatter for this format
    pub fn formatter(
        &self,
        speakers: SpeakerConfig,
        title: String,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Html => Box::new(HtmlFormatter::document(
                HtmlRenderer::new(speakers),
                title,
            )),
            OutputFormat::Fragment => {
                Box::new(HtmlFormatter::fragment(HtmlRenderer::new(speakers)))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_value_enum_names_match_config_names() {
        for format in OutputFormat::ALL {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.as_str());
        }
        assert_eq!(
            OutputFormat::value_variants().len(),
            OutputFormat::ALL.len()
        );
    }

    #[test]
    fn test_formatter_dispatch() {
        let entries = vec![Entry {
            speaker: "Alice".to_string(),
            timestamp: "0:01".to_string(),
            paragraphs: vec!["hi".to_string()],
        }];
        let speakers = SpeakerConfig::host_only("Alice");

        let html = OutputFormat::Html
            .formatter(speakers.clone(), "T".to_string(), true)
            .format_entries(&entries)
            .unwrap();
        assert!(html.body.starts_with("<!DOCTYPE html>"));
        assert!(!html.clipboard.contains("<!DOCTYPE html>"));

        let json = OutputFormat::Json
            .formatter(speakers, "T".to_string(), false)
            .format_entries(&entries)
            .unwrap();
        assert_eq!(json.body, json.clipboard);
    }
}

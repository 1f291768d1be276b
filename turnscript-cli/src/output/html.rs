//! HTML output formatter

use super::{FormattedOutput, OutputFormatter};
use crate::error::CliError;
use anyhow::Result;
use turnscript_core::{Entry, HtmlRenderer};

/// HTML formatter - full page or bare fragment
pub struct HtmlFormatter {
    renderer: HtmlRenderer,
    /// Page title; `None` renders the fragment only
    title: Option<String>,
}

impl HtmlFormatter {
    /// Formatter producing a standalone page
    pub fn document(renderer: HtmlRenderer, title: String) -> Self {
        Self {
            renderer,
            title: Some(title),
        }
    }

    /// Formatter producing the transcript fragment only
    pub fn fragment(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            title: None,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<FormattedOutput> {
        let fragment = self
            .renderer
            .render_fragment(entries)
            .map_err(CliError::from)?;
        match &self.title {
            Some(title) => {
                let page = self
                    .renderer
                    .render_document(&fragment, title)
                    .map_err(CliError::from)?;
                Ok(FormattedOutput {
                    body: page,
                    clipboard: fragment,
                })
            }
            None => Ok(FormattedOutput::same(fragment)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnscript_core::SpeakerConfig;

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                speaker: "Alice".to_string(),
                timestamp: "1:02".to_string(),
                paragraphs: vec!["hello".to_string()],
            },
            Entry {
                speaker: "Bob".to_string(),
                timestamp: "1:03:05".to_string(),
                paragraphs: vec!["world".to_string()],
            },
        ]
    }

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(SpeakerConfig::new(Some("Alice"), Some("Bob")))
    }

    #[test]
    fn test_document_body_and_fragment_clipboard() {
        let output = HtmlFormatter::document(renderer(), "Alice & Bob".to_string())
            .format_entries(&entries())
            .unwrap();

        assert!(output.body.contains("<title>Alice &#38; Bob</title>"));
        assert!(output.body.contains(&output.clipboard));
        assert!(output
            .clipboard
            .starts_with("<div><span class=\"host\">Alice</span>"));
    }

    #[test]
    fn test_fragment_only() {
        let output = HtmlFormatter::fragment(renderer())
            .format_entries(&entries())
            .unwrap();

        assert_eq!(output.body, output.clipboard);
        assert!(!output.body.contains("<html"));
        assert!(output.body.contains("<span class=\"guest\">Bob</span>"));
    }
}

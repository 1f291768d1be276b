//! HTML rendering through compiled askama templates

use crate::domain::{Entry, SpeakerConfig};
use crate::error::RenderResult;
use askama::Template;

/// Entry as seen by the transcript template
struct EntryView<'a> {
    class: &'static str,
    speaker: &'a str,
    timestamp: &'a str,
    paragraphs: &'a [String],
}

#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptTemplate<'a> {
    entries: Vec<EntryView<'a>>,
}

#[derive(Template)]
#[template(path = "base.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    content: &'a str,
}

/// Renders entries as an HTML fragment or a standalone page
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    speakers: SpeakerConfig,
}

impl HtmlRenderer {
    /// Create a renderer that classes entries by the given speakers
    pub fn new(speakers: SpeakerConfig) -> Self {
        Self { speakers }
    }

    /// CSS class for a speaker label, empty for unknown speakers
    pub fn speaker_class(&self, speaker: &str) -> &'static str {
        self.speakers
            .role_of(speaker)
            .map(|role| role.css_class())
            .unwrap_or("")
    }

    /// Render entries as a transcript fragment with blank lines removed
    pub fn render_fragment(&self, entries: &[Entry]) -> RenderResult<String> {
        let template = TranscriptTemplate {
            entries: entries
                .iter()
                .map(|entry| EntryView {
                    class: self.speaker_class(&entry.speaker),
                    speaker: &entry.speaker,
                    timestamp: &entry.timestamp,
                    paragraphs: &entry.paragraphs,
                })
                .collect(),
        };

        Ok(strip_blank_lines(&template.render()?))
    }

    /// Wrap a rendered fragment in the base page
    pub fn render_document(&self, fragment: &str, title: &str) -> RenderResult<String> {
        let page = DocumentTemplate {
            title,
            content: fragment,
        };
        Ok(page.render()?)
    }

    /// Render entries straight to a full page
    pub fn render(&self, entries: &[Entry], title: &str) -> RenderResult<String> {
        let fragment = self.render_fragment(entries)?;
        self.render_document(&fragment, title)
    }
}

/// Trim every line and drop the empty ones; each kept line ends with `\n`
pub fn strip_blank_lines(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(String::with_capacity(content.len()), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

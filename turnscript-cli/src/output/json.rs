//! JSON output formatter

use super::{FormattedOutput, OutputFormatter};
use anyhow::Result;
use turnscript_core::Entry;

/// JSON formatter - outputs entries as a JSON array
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_entries(&self, entries: &[Entry]) -> Result<FormattedOutput> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(entries)?
        } else {
            serde_json::to_string(entries)?
        };
        json.push('\n');
        Ok(FormattedOutput::same(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_json() {
        let entries = vec![Entry {
            speaker: "Alice".to_string(),
            timestamp: "1:02".to_string(),
            paragraphs: vec!["hello".to_string()],
        }];
        let output = JsonFormatter::new(false).format_entries(&entries).unwrap();
        assert_eq!(
            output.body,
            "[{\"speaker\":\"Alice\",\"timestamp\":\"1:02\",\"paragraphs\":[\"hello\"]}]\n"
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let entries = vec![Entry::unattributed(vec!["intro".to_string()])];
        let output = JsonFormatter::new(true).format_entries(&entries).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&output.body).unwrap();
        assert_eq!(parsed, entries);
        assert!(output.body.contains("\n  "));
    }
}

//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use turnscript_core::SpeakerConfig;

/// Output file used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "transcript.html";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Speaker names
    #[serde(default)]
    pub speakers: SpeakersConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Host and guest names
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpeakersConfig {
    /// Host name
    pub host: Option<String>,

    /// Guest name
    pub guest: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file path
    pub path: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Copy the rendered transcript to the clipboard
    pub clipboard: bool,

    /// Page title for HTML documents
    pub title: Option<String>,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Html,
            clipboard: true,
            title: None,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Speaker configuration for the core
    pub fn speaker_config(&self) -> SpeakerConfig {
        SpeakerConfig::new(
            self.speakers.host.as_deref(),
            self.speakers.guest.as_deref(),
        )
    }

    /// Title for HTML pages, derived from the speakers when unset
    pub fn title(&self) -> String {
        if let Some(title) = &self.output.title {
            return title.clone();
        }
        let speakers = self.speaker_config();
        match (speakers.host(), speakers.guest()) {
            (Some(host), Some(guest)) => format!("{host} & {guest}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => "Transcript".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.path, PathBuf::from("transcript.html"));
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(config.output.clipboard);
        assert_eq!(config.speakers.host, None);
        assert_eq!(config.title(), "Transcript");
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_toml(
            r#"
[speakers]
host = "Dr. Smith"
guest = "Bob"

[output]
path = "out/episode.html"
format = "json"
clipboard = false
title = "Episode 1"
pretty_json = false
"#,
        )
        .unwrap();

        assert_eq!(config.speakers.host.as_deref(), Some("Dr. Smith"));
        assert_eq!(config.speakers.guest.as_deref(), Some("Bob"));
        assert_eq!(config.output.path, PathBuf::from("out/episode.html"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.clipboard);
        assert_eq!(config.title(), "Episode 1");
    }

    #[test]
    fn test_partial_output_section_keeps_defaults() {
        let config = CliConfig::from_toml("[output]\nclipboard = false\n").unwrap();
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.output.pretty_json);
        assert!(!config.output.clipboard);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CliConfig::from_toml("[speakers]\nhots = \"Alice\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = CliConfig::from_toml("[speakers]\nhost = \"Alice\"\nguest = 42\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3"), "{msg}");
        assert!(msg.contains("column"), "{msg}");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::from_toml("[output]\nformat = \"pdf\"\n").is_err());
    }

    #[test]
    fn test_title_from_speakers() {
        let mut config = CliConfig::default();
        config.speakers.host = Some("Alice".to_string());
        assert_eq!(config.title(), "Alice");
        config.speakers.guest = Some("Bob".to_string());
        assert_eq!(config.title(), "Alice & Bob");
    }

    #[test]
    fn test_empty_speaker_is_inactive() {
        let config = CliConfig::from_toml("[speakers]\nhost = \"\"\nguest = \"Bob\"\n").unwrap();
        let speakers = config.speaker_config();
        assert_eq!(speakers.host(), None);
        assert_eq!(speakers.guest(), Some("Bob"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = CliConfig::default();
        config.speakers.host = Some("Alice".to_string());
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}

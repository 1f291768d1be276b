//! Entry and speaker configuration types

use serde::{Deserialize, Serialize};

/// One contiguous speaker turn
///
/// An entry with an empty speaker holds leading text that appeared before
/// any recognized marker line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Speaker label, empty for unattributed leading text
    pub speaker: String,
    /// Timestamp as written in the marker line (`H:MM` or `H:MM:SS`)
    pub timestamp: String,
    /// Non-blank body lines spoken during the turn, in order
    pub paragraphs: Vec<String>,
}

impl Entry {
    /// Create an entry for a speaker turn with no paragraphs yet
    pub fn new(speaker: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            timestamp: timestamp.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Create an unattributed entry holding the given paragraphs
    pub fn unattributed(paragraphs: Vec<String>) -> Self {
        Self {
            speaker: String::new(),
            timestamp: String::new(),
            paragraphs,
        }
    }

    /// Whether this entry carries no speaker
    pub fn is_unattributed(&self) -> bool {
        self.speaker.is_empty()
    }
}

/// Role of a configured speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeakerRole {
    /// The host slot, checked first
    Host,
    /// The guest slot
    Guest,
}

impl SpeakerRole {
    /// CSS class used by the HTML renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            SpeakerRole::Host => "host",
            SpeakerRole::Guest => "guest",
        }
    }
}

/// Host and guest names; an empty or missing name is an inactive slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerConfig {
    host: Option<String>,
    guest: Option<String>,
}

impl SpeakerConfig {
    /// Create a configuration, treating empty names as inactive
    pub fn new(host: Option<impl Into<String>>, guest: Option<impl Into<String>>) -> Self {
        Self {
            host: host.map(Into::into).filter(|name| !name.is_empty()),
            guest: guest.map(Into::into).filter(|name| !name.is_empty()),
        }
    }

    /// Configuration with only a host
    pub fn host_only(host: impl Into<String>) -> Self {
        Self::new(Some(host), None::<String>)
    }

    /// Active host name
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Active guest name
    pub fn guest(&self) -> Option<&str> {
        self.guest.as_deref()
    }

    /// Active slots in precedence order
    pub fn active(&self) -> impl Iterator<Item = (SpeakerRole, &str)> {
        [
            (SpeakerRole::Host, self.host()),
            (SpeakerRole::Guest, self.guest()),
        ]
        .into_iter()
        .filter_map(|(role, name)| name.map(|name| (role, name)))
    }

    /// Role of a speaker label; the host wins when both names are equal
    pub fn role_of(&self, speaker: &str) -> Option<SpeakerRole> {
        self.active()
            .find(|(_, name)| *name == speaker)
            .map(|(role, _)| role)
    }

    /// Whether host and guest are both set to the same name
    pub fn has_identical_names(&self) -> bool {
        matches!((self.host(), self.guest()), (Some(host), Some(guest)) if host == guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_are_inactive() {
        let config = SpeakerConfig::new(Some(""), Some("Bob"));
        assert_eq!(config.host(), None);
        assert_eq!(config.guest(), Some("Bob"));
        assert_eq!(config.active().count(), 1);
    }

    #[test]
    fn test_role_of() {
        let config = SpeakerConfig::new(Some("Alice"), Some("Bob"));
        assert_eq!(config.role_of("Alice"), Some(SpeakerRole::Host));
        assert_eq!(config.role_of("Bob"), Some(SpeakerRole::Guest));
        assert_eq!(config.role_of(""), None);
        assert_eq!(config.role_of("Carol"), None);
    }

    #[test]
    fn test_identical_names_resolve_to_host() {
        let config = SpeakerConfig::new(Some("Sam"), Some("Sam"));
        assert!(config.has_identical_names());
        assert_eq!(config.role_of("Sam"), Some(SpeakerRole::Host));
    }

    #[test]
    fn test_entry_is_unattributed() {
        assert!(Entry::default().is_unattributed());
        assert!(Entry::unattributed(vec!["intro".to_string()]).is_unattributed());
        assert!(!Entry::new("Alice", "1:00").is_unattributed());
    }

    #[test]
    fn test_entry_serializes_field_names() {
        let entry = Entry {
            speaker: "Alice".to_string(),
            timestamp: "1:02".to_string(),
            paragraphs: vec!["hello".to_string()],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"speaker":"Alice","timestamp":"1:02","paragraphs":["hello"]}"#
        );
    }
}

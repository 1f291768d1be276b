//! Accumulator for the turn currently being built

use super::entry::Entry;

/// The entry under construction
///
/// Leading text is collected without a speaker. The first marker promotes it
/// in place to a turn, keeping any paragraphs already gathered; later markers
/// close the current turn and open a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// No marker seen yet
    Leading {
        /// Body lines seen before the first marker
        paragraphs: Vec<String>,
    },
    /// A speaker turn is open
    Turn(Entry),
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::Leading {
            paragraphs: Vec::new(),
        }
    }
}

impl TurnState {
    /// Start a turn for `speaker`, returning the entry that was closed, if any
    pub fn open_turn(&mut self, speaker: &str, timestamp: &str) -> Option<Entry> {
        let mut next = Entry::new(speaker, timestamp);
        let closed = match std::mem::take(self) {
            TurnState::Leading { paragraphs } => {
                next.paragraphs = paragraphs;
                None
            }
            TurnState::Turn(closed) => Some(closed),
        };
        *self = TurnState::Turn(next);
        closed
    }

    /// Append a body line to the open entry
    pub fn push_paragraph(&mut self, paragraph: impl Into<String>) {
        match self {
            TurnState::Leading { paragraphs } => paragraphs.push(paragraph.into()),
            TurnState::Turn(entry) => entry.paragraphs.push(paragraph.into()),
        }
    }

    /// Whether a speaker has been assigned
    pub fn has_speaker(&self) -> bool {
        matches!(self, TurnState::Turn(_))
    }

    /// Close the accumulator unconditionally
    pub fn into_entry(self) -> Entry {
        match self {
            TurnState::Leading { paragraphs } => Entry::unattributed(paragraphs),
            TurnState::Turn(entry) => entry,
        }
    }
}

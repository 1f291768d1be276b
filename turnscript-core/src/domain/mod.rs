//! Transcript domain: entries, marker matching and segmentation

pub mod entry;
pub mod marker;
pub mod segmenter;
pub mod state;

pub use entry::{Entry, SpeakerConfig, SpeakerRole};
pub use marker::MarkerMatcher;
pub use segmenter::{segment, Segmentation, Segmenter};
pub use state::TurnState;

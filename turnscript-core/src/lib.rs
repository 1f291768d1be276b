//! Speaker-turn segmentation for plain-text dialogue transcripts
//!
//! A transcript is a stream of lines in which `Speaker (H:MM[:SS])` marker
//! lines open a new turn. This crate partitions such a stream into ordered
//! [`Entry`] values and renders them as HTML.
//!
//! # Example
//!
//! ```rust
//! use turnscript_core::{HtmlRenderer, Segmenter, SpeakerConfig};
//!
//! let speakers = SpeakerConfig::new(Some("Alice"), Some("Bob"));
//! let segmenter = Segmenter::new(&speakers).unwrap();
//!
//! let entries = segmenter.segment(["Alice (1:02)", "hello", "Bob (1:03:05)", "world"]);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1].speaker, "Bob");
//! assert_eq!(entries[1].timestamp, "1:03:05");
//!
//! let html = HtmlRenderer::new(speakers).render_fragment(&entries).unwrap();
//! assert!(html.contains("<p>world</p>"));
//! ```

pub mod domain;
pub mod error;
pub mod render;

pub use domain::{
    segment, Entry, MarkerMatcher, Segmentation, Segmenter, SpeakerConfig, SpeakerRole,
    TurnState,
};
pub use error::{RenderError, RenderResult, Result, SegmentError};
pub use render::{strip_blank_lines, HtmlRenderer};

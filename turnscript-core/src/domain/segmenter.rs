//! Transcript segmentation into speaker turns

use super::entry::{Entry, SpeakerConfig};
use super::marker::MarkerMatcher;
use super::state::TurnState;
use crate::error::Result;
use std::io::BufRead;

/// Splits transcript lines into speaker-attributed entries
///
/// Matchers are compiled once at construction and reused for every line and
/// every transcript segmented with this instance.
#[derive(Debug, Clone)]
pub struct Segmenter {
    host: Option<MarkerMatcher>,
    guest: Option<MarkerMatcher>,
}

impl Segmenter {
    /// Build the matchers for the active speaker slots
    pub fn new(speakers: &SpeakerConfig) -> Result<Self> {
        Ok(Self {
            host: speakers.host().map(MarkerMatcher::new).transpose()?,
            guest: speakers.guest().map(MarkerMatcher::new).transpose()?,
        })
    }

    /// Begin an incremental run with a fresh accumulator
    pub fn start(&self) -> Segmentation<'_> {
        Segmentation {
            segmenter: self,
            state: TurnState::default(),
            entries: Vec::new(),
        }
    }

    /// Segment a complete sequence of lines
    pub fn segment<I, S>(&self, lines: I) -> Vec<Entry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut run = self.start();
        for line in lines {
            run.push_line(line.as_ref());
        }
        run.finish()
    }

    /// Segment every line of a reader
    ///
    /// A read error aborts the run; no partial result is returned.
    pub fn segment_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Entry>> {
        let mut run = self.start();
        for line in reader.lines() {
            run.push_line(&line?);
        }
        Ok(run.finish())
    }

    /// Marker lookup in precedence order: host first, then guest
    fn match_marker<'l>(&self, line: &'l str) -> Option<(&str, &'l str)> {
        [self.host.as_ref(), self.guest.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|matcher| {
                matcher
                    .match_line(line)
                    .map(|timestamp| (matcher.speaker(), timestamp))
            })
    }
}

/// A single segmentation run over one transcript
#[derive(Debug)]
pub struct Segmentation<'a> {
    segmenter: &'a Segmenter,
    state: TurnState,
    entries: Vec<Entry>,
}

impl Segmentation<'_> {
    /// Feed the next raw line
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();

        if let Some((speaker, timestamp)) = self.segmenter.match_marker(line) {
            if let Some(closed) = self.state.open_turn(speaker, timestamp) {
                log::debug!(
                    "closed turn for '{}' at {} ({} paragraphs)",
                    closed.speaker,
                    closed.timestamp,
                    closed.paragraphs.len()
                );
                self.entries.push(closed);
            }
        } else if !line.is_empty() {
            self.state.push_paragraph(line);
        }
    }

    /// Flush the open entry and return all entries
    pub fn finish(mut self) -> Vec<Entry> {
        if !self.state.has_speaker() {
            log::debug!("no marker line matched; transcript kept as unattributed text");
        }
        self.entries.push(self.state.into_entry());
        self.entries
    }
}

/// Segment `lines` with optional host and guest names
///
/// Fails only if a speaker's marker pattern cannot be compiled.
pub fn segment<I, S>(lines: I, host: Option<&str>, guest: Option<&str>) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segmenter = Segmenter::new(&SpeakerConfig::new(host, guest))?;
    Ok(segmenter.segment(lines))
}

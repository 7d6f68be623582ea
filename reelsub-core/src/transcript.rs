//! Transcription service output adapter.
//!
//! The service emits `start`/`end`/`text` segments with optional `words`
//! carrying `word`/`start`/`end`. Unknown fields (token ids, probabilities)
//! are ignored.

use crate::error::Result;
use crate::types::{Segment, Word};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct WireWord {
    word: String,
    start: f64,
    end: f64,
}

#[derive(Debug, Deserialize)]
struct WireSegment {
    start: f64,
    end: f64,
    text: String,
    #[serde(default)]
    words: Option<Vec<WireWord>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireTranscript {
    Response {
        segments: Vec<WireSegment>,
        #[serde(default)]
        language: Option<String>,
    },
    Segments(Vec<WireSegment>),
}

impl From<WireWord> for Word {
    fn from(w: WireWord) -> Self {
        Word::new(w.word, w.start, w.end)
    }
}

impl From<WireSegment> for Segment {
    fn from(s: WireSegment) -> Self {
        let words = s
            .words
            .unwrap_or_default()
            .into_iter()
            .map(Word::from)
            .collect();
        Segment::new(s.text, s.start, s.end).with_words(words)
    }
}

/// Transcribed segments with the detected language, if reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub segments: Vec<Segment>,
    pub language: Option<String>,
}

impl Transcript {
    /// End of the last segment in seconds.
    pub fn duration(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end).max(0.0)
    }

    /// Number of segments that carry word-level timings.
    pub fn timed_segments(&self) -> usize {
        self.segments.iter().filter(|s| !s.words.is_empty()).count()
    }
}

impl From<WireTranscript> for Transcript {
    fn from(wire: WireTranscript) -> Self {
        let (segments, language) = match wire {
            WireTranscript::Response { segments, language } => (segments, language),
            WireTranscript::Segments(segments) => (segments, None),
        };

        Self {
            segments: segments.into_iter().map(Segment::from).collect(),
            language,
        }
    }
}

/// Parse a transcript from a segment array or a `{ "segments": [...] }` object.
pub fn parse_transcript(json: &str) -> Result<Transcript> {
    let wire: WireTranscript = serde_json::from_str(json)?;
    Ok(wire.into())
}

/// Read and parse a transcript file.
pub fn load_transcript(path: impl AsRef<Path>) -> Result<Transcript> {
    let raw = std::fs::read_to_string(path)?;
    parse_transcript(&raw)
}

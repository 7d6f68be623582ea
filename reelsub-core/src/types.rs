//! Core types for reelsub-core

use serde::Serialize;

/// Word with timestamps.
///
/// Represents a single spoken word with start and end times in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    /// Word text, possibly with surrounding whitespace
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Transcribed speech span with timestamps.
///
/// `words` is empty when the transcription carried no word-level timing.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Transcribed text
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Word-level timestamps in spoken order
    pub words: Vec<Word>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }
}

/// Display-ready subtitle unit.
///
/// Shared by the preview lookup, SRT export and ASS export.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    pub text: String,
    #[serde(rename = "startTime")]
    pub start: f64,
    #[serde(rename = "endTime")]
    pub end: f64,
}

impl Entry {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether `time` falls inside `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }
}

//! Flattens transcript segments into display entries.
//!
//! Every consumer (preview lookup, SRT, ASS) reads the output of
//! [`build_entries`], so timing decisions are made here and nowhere else.

use crate::config::{DisplayConfig, DisplayMode};
use crate::types::{Entry, Segment, Word};

/// Characters that end a phrase early once it holds more than one word.
const CLAUSE_BREAKS: [char; 6] = ['.', '?', '!', ',', ';', ':'];

/// Build display entries from segments.
///
/// Segments are processed independently and their entries concatenated in
/// input order. Segments without word timings always produce a single
/// sentence entry, whatever the configured mode.
pub fn build_entries(segments: &[Segment], config: &DisplayConfig) -> Vec<Entry> {
    let entries: Vec<Entry> = segments
        .iter()
        .flat_map(|segment| segment_entries(segment, config))
        .collect();

    tracing::debug!(
        segments = segments.len(),
        entries = entries.len(),
        mode = ?config.mode,
        "built entries"
    );

    entries
}

/// Entries for one segment under the configured mode.
fn segment_entries(segment: &Segment, config: &DisplayConfig) -> Vec<Entry> {
    if segment.words.is_empty() {
        return vec![sentence_entry(segment)];
    }

    match config.mode {
        DisplayMode::Sentence => vec![sentence_entry(segment)],
        DisplayMode::Word => word_entries(segment),
        DisplayMode::Phrase => phrase_entries(segment, config.words_per_line),
    }
}

fn sentence_entry(segment: &Segment) -> Entry {
    Entry::new(segment.text.trim(), segment.start, segment.end)
}

/// One entry per word, each held until the next word starts.
fn word_entries(segment: &Segment) -> Vec<Entry> {
    let words = &segment.words;

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let end = gap_filled_end(segment, words.get(i + 1));
            Entry::new(word.text.trim(), word.start, end)
        })
        .collect()
}

/// Greedy word groups of at most `words_per_line`, broken early at clause
/// punctuation.
///
/// A lone punctuation token never breaks a phrase on its own.
fn phrase_entries(segment: &Segment, words_per_line: usize) -> Vec<Entry> {
    let words = &segment.words;
    let limit = words_per_line.max(1);

    let mut entries = Vec::new();
    let mut first = 0;

    for (i, word) in words.iter().enumerate() {
        let count = i + 1 - first;
        let is_last = i + 1 == words.len();
        let is_clause_end = count > 1 && word.text.contains(CLAUSE_BREAKS);

        if count >= limit || is_clause_end || is_last {
            let end = gap_filled_end(segment, words.get(i + 1));
            entries.push(merge_words(&words[first..=i], end));
            first = i + 1;
        }
    }

    entries
}

/// End time extended to the following word, never past the segment.
fn gap_filled_end(segment: &Segment, next: Option<&Word>) -> f64 {
    match next {
        Some(next) => next.start.min(segment.end),
        None => segment.end,
    }
}

/// Merge consecutive words into a single entry ending at `end`.
fn merge_words(words: &[Word], end: f64) -> Entry {
    let text = words
        .iter()
        .map(|w| w.text.trim())
        .collect::<Vec<_>>()
        .join(" ");
    let start = words.first().map_or(end, |w| w.start);

    Entry::new(text, start, end)
}

//! SRT subtitle conversion utilities.
//!
//! Converts display entries into SRT subtitle format.

use crate::timecode::{format_srt, srt_timestamp};
use crate::types::Entry;
use srtlib::Subtitle;

/// Convert entries to SRT subtitles numbered from 1.
///
/// Timestamps saturate at the `srtlib` ceiling; [`generate_srt`] does not.
pub fn to_subtitles(entries: &[Entry]) -> Vec<Subtitle> {
    entries
        .iter()
        .zip(1..)
        .map(|(e, i)| create_subtitle(e, i))
        .collect()
}

/// Create a subtitle from an entry.
fn create_subtitle(entry: &Entry, index: usize) -> Subtitle {
    Subtitle::new(
        index,
        srt_timestamp(entry.start),
        srt_timestamp(entry.end),
        entry.text.clone(),
    )
}

/// One SRT block followed by a blank line.
fn block(entry: &Entry, index: usize) -> String {
    format!(
        "{index}\n{} --> {}\n{}\n\n",
        format_srt(entry.start),
        format_srt(entry.end),
        entry.text
    )
}

/// Render numbered entries as SRT blocks.
fn display_blocks<'a>(numbered: impl IntoIterator<Item = (&'a Entry, usize)>) -> String {
    numbered.into_iter().map(|(e, i)| block(e, i)).collect()
}

/// Generate an SRT document from entries.
///
/// Text is written verbatim; entry order is preserved.
pub fn generate_srt(entries: &[Entry]) -> String {
    display_blocks(entries.iter().zip(1..))
}

/// Display preview of an SRT document (first and last blocks).
pub fn preview_subtitles(entries: &[Entry], head_count: usize, tail_count: usize) -> String {
    let total = entries.len();

    if total <= head_count + tail_count {
        generate_srt(entries)
    } else {
        let numbered: Vec<_> = entries.iter().zip(1..).collect();
        let mut out = display_blocks(numbered[..head_count].iter().copied());
        out.push_str("...\n\n");
        out.push_str(&display_blocks(numbered[total - tail_count..].iter().copied()));
        out
    }
}

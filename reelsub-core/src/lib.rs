//! reelsub-core: subtitle entries and exports for short-form video.
//!
//! Transcript segments with optional word timings are flattened into display
//! entries once, and every consumer renders from those same entries:
//!
//! - [`entry::build_entries`]: segments + display config into entries
//! - [`srt::generate_srt`]: entries into an SRT document
//! - [`ass::generate_ass`]: entries + style into an ASS document for burn-in
//! - [`timeline::active_entry`]: the entry shown at a playback time
//!
//! # Quick Start
//!
//! ```
//! use reelsub_core::config::{Canvas, DisplayConfig, DisplayMode, StyleConfig};
//! use reelsub_core::types::{Segment, Word};
//! use reelsub_core::{ass, entry, srt};
//!
//! let segments = vec![Segment::new(" Hi there.", 0.0, 1.0).with_words(vec![
//!     Word::new(" Hi", 0.0, 0.4),
//!     Word::new(" there.", 0.5, 1.0),
//! ])];
//!
//! let config = DisplayConfig::new(DisplayMode::Word, 3);
//! let entries = entry::build_entries(&segments, &config);
//!
//! let srt = srt::generate_srt(&entries);
//! assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:00,500\nHi\n"));
//!
//! let ass = ass::generate_ass(&entries, &StyleConfig::default(), Canvas::default());
//! assert!(ass.contains("Dialogue: 0,0:00:00.50,0:00:01.00,Default,,0,0,0,,there."));
//! ```

pub mod ass;
pub mod color;
pub mod config;
pub mod difficulty;
pub mod entry;
pub mod error;
pub mod srt;
pub mod timecode;
pub mod timeline;
pub mod transcript;
pub mod types;

//! Client-side transcode cost classification.

use serde::Serialize;
use std::fmt;

/// Expected cost of transcoding a video with subtitles burned in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Warning banner text; easy jobs need none.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some("This video may take a few minutes to export."),
            Difficulty::Hard => Some(
                "This video is long or high resolution; exporting may be slow or run out of memory.",
            ),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Classify by duration and megapixels.
pub fn estimate(duration_secs: f64, width: u32, height: u32) -> Difficulty {
    let megapixels = width as f64 * height as f64 / 1e6;

    if duration_secs < 60.0 && megapixels < 2.0 {
        Difficulty::Easy
    } else if duration_secs > 180.0 || megapixels > 4.0 {
        Difficulty::Hard
    } else {
        Difficulty::Medium
    }
}

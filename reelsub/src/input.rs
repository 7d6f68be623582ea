//! Shared transcript and style inputs for the export subcommands.

use eyre::{Context, Result};
use reelsub_core::config::{
    Canvas, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DisplayMode, StyleConfig,
};
use reelsub_core::entry::build_entries;
use reelsub_core::timeline::check_order;
use reelsub_core::transcript::{Transcript, load_transcript};
use reelsub_core::types::Entry;
use std::path::PathBuf;

/// CLI arguments selecting a transcript and its display style.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Path to transcript JSON (segment array or transcription response)
    pub segments: PathBuf,

    /// Style JSON exported by the editor (default: built-in style)
    #[arg(short, long)]
    pub style: Option<PathBuf>,

    /// Override the display mode from the style
    #[arg(long, value_enum)]
    pub mode: Option<DisplayMode>,

    /// Override the words per phrase from the style
    #[arg(long)]
    pub words_per_line: Option<usize>,
}

/// Loaded transcript with its resolved style.
#[derive(Debug)]
pub struct Input {
    pub segments_path: PathBuf,
    pub transcript: Transcript,
    pub style: StyleConfig,
}

impl TryFrom<InputArgs> for Input {
    type Error = eyre::Error;

    fn try_from(args: InputArgs) -> Result<Self> {
        let mut style = match &args.style {
            Some(path) => load_style(path)?,
            None => StyleConfig::default(),
        };

        if let Some(mode) = args.mode {
            style.display_mode = mode;
        }
        if let Some(n) = args.words_per_line {
            style.words_per_line = n;
        }

        style.validate().wrap_err("invalid style")?;

        let transcript = load_transcript(&args.segments)
            .wrap_err_with(|| format!("failed to load transcript: {:?}", args.segments.display()))?;

        tracing::info!(
            path = ?args.segments.display(),
            segments = transcript.segments.len(),
            timed = transcript.timed_segments(),
            language = transcript.language.as_deref().unwrap_or("unknown"),
            "transcript loaded"
        );

        Ok(Self {
            segments_path: args.segments,
            transcript,
            style,
        })
    }
}

impl Input {
    /// Build the display entries every export renders from.
    ///
    /// Ordering problems are reported and passed through unchanged.
    pub fn entries(&self) -> Vec<Entry> {
        for issue in check_order(&self.transcript.segments) {
            tracing::warn!(%issue, "segment timing");
        }

        let entries = build_entries(&self.transcript.segments, &self.style.display());

        tracing::info!(
            mode = ?self.style.display_mode,
            words_per_line = self.style.words_per_line,
            entries = entries.len(),
            "entries built"
        );

        entries
    }
}

/// Read a style file; validation waits until CLI overrides are applied.
fn load_style(path: &std::path::Path) -> Result<StyleConfig> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read style: {:?}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse style: {:?}", path.display()))
}

/// CLI arguments for the ASS canvas size.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct CanvasArgs {
    /// Video width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Video height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,
}

impl TryFrom<CanvasArgs> for Canvas {
    type Error = eyre::Error;

    fn try_from(args: CanvasArgs) -> Result<Self> {
        Ok(Canvas::new(args.width, args.height)?)
    }
}

//! Burn subcommand - render subtitles into the video frames with ffmpeg.

use crate::ffmpeg;
use crate::input::{CanvasArgs, Input, InputArgs};
use color_eyre::Section;
use eyre::{Context, OptionExt, Result};
use reelsub_core::ass;
use reelsub_core::config::Canvas;
use reelsub_core::difficulty::{Difficulty, estimate};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI arguments for burn-in export.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input video
    pub video: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output video path (default: subtitled_<name>.<format> next to the video)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output container extension when no output path is given
    #[arg(long, default_value = "mp4")]
    pub format: String,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Give up on ffmpeg after this many seconds
    #[arg(long, default_value_t = ffmpeg::DEFAULT_TIMEOUT)]
    pub timeout: u64,
}

/// Resolved configuration for burn-in export.
#[derive(Debug)]
pub struct Config {
    pub video: PathBuf,
    pub input: Input,
    pub output: PathBuf,
    pub canvas: Canvas,
    pub timeout: Duration,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = match args.output {
            Some(output) => output,
            None => prefixed_output(&args.video, "subtitled", &args.format)?,
        };

        Ok(Self {
            canvas: args.canvas.try_into()?,
            input: args.input.try_into()?,
            video: args.video,
            output,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}

/// `<dir>/<prefix>_<stem>.<extension>` next to `video`.
pub fn prefixed_output(video: &Path, prefix: &str, extension: &str) -> Result<PathBuf> {
    let stem = video
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_eyre("video path has no file name")?;

    Ok(video.with_file_name(format!("{prefix}_{stem}.{extension}")))
}

pub fn execute(config: Config) -> Result<()> {
    let entries = config.input.entries();

    let difficulty = estimate(
        config.input.transcript.duration(),
        config.canvas.width,
        config.canvas.height,
    );
    if difficulty != Difficulty::Easy {
        tracing::warn!(%difficulty, "{}", difficulty.warning().unwrap_or_default());
    }

    let subtitle_path = config.output.with_extension("ass");
    let document = ass::generate_ass(&entries, &config.input.style, config.canvas);

    tracing::info!(path = ?subtitle_path.display(), "write ass file");

    std::fs::write(&subtitle_path, document)
        .wrap_err_with(|| format!("failed to write ass: {:?}", subtitle_path.display()))?;

    tracing::info!(
        video = ?config.video.display(),
        output = ?config.output.display(),
        "burning subtitles"
    );

    let args = ffmpeg::burn_args(&config.video, &subtitle_path, &config.output);

    ffmpeg::run(&args, config.timeout)
        .wrap_err("failed to burn subtitles")
        .with_note(|| format!("subtitles were written to: {:?}", subtitle_path.display()))
}

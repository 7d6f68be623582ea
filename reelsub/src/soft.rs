//! Soft subcommand - mux subtitles into an MKV as a selectable track.

use crate::burn::prefixed_output;
use crate::ffmpeg;
use crate::input::{Input, InputArgs};
use color_eyre::Section;
use eyre::{Context, Result};
use reelsub_core::srt;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for soft subtitle export.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input video
    pub video: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output MKV path (default: softsubs_<name>.mkv next to the video)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Give up on ffmpeg after this many seconds
    #[arg(long, default_value_t = ffmpeg::DEFAULT_TIMEOUT)]
    pub timeout: u64,
}

/// Resolved configuration for soft subtitle export.
#[derive(Debug)]
pub struct Config {
    pub video: PathBuf,
    pub input: Input,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = match args.output {
            Some(output) => output,
            None => prefixed_output(&args.video, "softsubs", "mkv")?,
        };

        Ok(Self {
            input: args.input.try_into()?,
            video: args.video,
            output,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let entries = config.input.entries();

    let subtitle_path = config.output.with_extension("srt");

    tracing::info!(path = ?subtitle_path.display(), "write srt file");

    std::fs::write(&subtitle_path, srt::generate_srt(&entries))
        .wrap_err_with(|| format!("failed to write srt: {:?}", subtitle_path.display()))?;

    tracing::info!(
        video = ?config.video.display(),
        output = ?config.output.display(),
        "muxing subtitles"
    );

    let args = ffmpeg::soft_mux_args(&config.video, &subtitle_path, &config.output);

    ffmpeg::run(&args, config.timeout)
        .wrap_err("failed to export soft subtitles")
        .with_note(|| format!("subtitles were written to: {:?}", subtitle_path.display()))
}

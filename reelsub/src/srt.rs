//! Srt subcommand - export display entries as an SRT file.

use crate::input::{Input, InputArgs};
use eyre::{Context, Result};
use reelsub_core::srt;
use std::path::PathBuf;

/// CLI arguments for SRT export.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output SRT path (default: same as transcript with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the first and last subtitles to stdout
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for SRT export.
#[derive(Debug)]
pub struct Config {
    pub input: Input,
    pub output: PathBuf,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.input.segments.with_extension("srt"));

        Ok(Self {
            input: args.input.try_into()?,
            output,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let entries = config.input.entries();
    let document = srt::generate_srt(&entries);

    tracing::info!(path = ?config.output.display(), "write srt file");

    std::fs::write(&config.output, &document)
        .wrap_err_with(|| format!("failed to write srt: {:?}", config.output.display()))?;

    if config.preview {
        print!("{}", srt::preview_subtitles(&entries, 3, 3));
    }

    Ok(())
}

//! Ass subcommand - export display entries as a styled ASS file.

use crate::input::{CanvasArgs, Input, InputArgs};
use eyre::{Context, Result};
use reelsub_core::ass;
use reelsub_core::config::Canvas;
use std::path::PathBuf;

/// CLI arguments for ASS export.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output ASS path (default: same as transcript with .ass extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// Resolved configuration for ASS export.
#[derive(Debug)]
pub struct Config {
    pub input: Input,
    pub output: PathBuf,
    pub canvas: Canvas,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.input.segments.with_extension("ass"));

        Ok(Self {
            canvas: args.canvas.try_into()?,
            input: args.input.try_into()?,
            output,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let entries = config.input.entries();
    let document = ass::generate_ass(&entries, &config.input.style, config.canvas);

    tracing::info!(
        path = ?config.output.display(),
        width = config.canvas.width,
        height = config.canvas.height,
        "write ass file"
    );

    std::fs::write(&config.output, document)
        .wrap_err_with(|| format!("failed to write ass: {:?}", config.output.display()))
}

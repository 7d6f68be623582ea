//! Entries subcommand - dump the preview entry list as JSON.

use crate::input::{Input, InputArgs};
use eyre::{Context, Result};
use reelsub_core::timeline::active_entry;
use std::path::PathBuf;

/// CLI arguments for entry inspection.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write JSON to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only show the entry visible at this time in seconds
    #[arg(long)]
    pub at: Option<f64>,
}

/// Resolved configuration for entry inspection.
#[derive(Debug)]
pub struct Config {
    pub input: Input,
    pub output: Option<PathBuf>,
    pub at: Option<f64>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            input: args.input.try_into()?,
            output: args.output,
            at: args.at,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let entries = config.input.entries();

    let json = match config.at {
        Some(time) => {
            let active = active_entry(&entries, time);
            tracing::debug!(time, found = active.is_some(), "entry lookup");
            serde_json::to_string_pretty(&active)?
        }
        None => serde_json::to_string_pretty(&entries)?,
    };

    match &config.output {
        Some(path) => {
            tracing::info!(path = ?path.display(), "write entries file");
            std::fs::write(path, json)
                .wrap_err_with(|| format!("failed to write entries: {:?}", path.display()))?;
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Estimate subcommand - classify how costly a burn-in export will be.

use eyre::Result;
use reelsub_core::difficulty::estimate;

/// CLI arguments for difficulty estimation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Video duration in seconds
    pub duration: f64,

    /// Video width in pixels
    pub width: u32,

    /// Video height in pixels
    pub height: u32,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: Args) -> Result<()> {
    let difficulty = estimate(args.duration, args.width, args.height);

    tracing::debug!(
        duration = args.duration,
        width = args.width,
        height = args.height,
        %difficulty,
        "estimated difficulty"
    );

    if args.json {
        let report = serde_json::json!({
            "difficulty": difficulty,
            "warning": difficulty.warning(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{difficulty}");
    if let Some(warning) = difficulty.warning() {
        println!("{warning}");
    }

    Ok(())
}

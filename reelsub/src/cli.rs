//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use reelsub_core::config::StyleConfig;

#[derive(Debug, Parser)]
#[command(name = "reel")]
#[command(about = "Subtitle export and burn-in for short-form video")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export transcript segments as SRT subtitles
    Srt(crate::srt::Args),

    /// Export transcript segments as styled ASS subtitles
    Ass(crate::ass::Args),

    /// Print the display entries used by the preview
    Entries(crate::entries::Args),

    /// Burn subtitles into a video with ffmpeg
    Burn(crate::burn::Args),

    /// Mux subtitles into an MKV as a soft track with ffmpeg
    Soft(crate::soft::Args),

    /// Classify the export cost of a video
    Estimate(crate::estimate::Args),

    /// Print the default style as JSON and exit
    DefaultStyle,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Srt(args) => crate::srt::execute(args.try_into()?),
        Commands::Ass(args) => crate::ass::execute(args.try_into()?),
        Commands::Entries(args) => crate::entries::execute(args.try_into()?),
        Commands::Burn(args) => crate::burn::execute(args.try_into()?),
        Commands::Soft(args) => crate::soft::execute(args.try_into()?),
        Commands::Estimate(args) => crate::estimate::execute(args),
        Commands::DefaultStyle => {
            println!("{}", serde_json::to_string_pretty(&StyleConfig::default())?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelsub_core::config::DisplayMode;

    #[test]
    fn parses_srt_command() {
        let cli = Cli::parse_from(["reel", "srt", "segments.json"]);

        match &cli.command {
            Commands::Srt(crate::srt::Args {
                input,
                output: None,
                preview: false,
            }) => {
                assert_eq!(input.segments.to_str(), Some("segments.json"));
                assert!(input.style.is_none());
                assert!(input.mode.is_none());
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_display_overrides() {
        let cli = Cli::parse_from([
            "reel",
            "srt",
            "segments.json",
            "--mode",
            "phrase",
            "--words-per-line",
            "4",
            "-o",
            "out.srt",
        ]);

        match &cli.command {
            Commands::Srt(crate::srt::Args {
                input,
                output: Some(output),
                ..
            }) if output.to_str() == Some("out.srt") => {
                assert_eq!(input.mode, Some(DisplayMode::Phrase));
                assert_eq!(input.words_per_line, Some(4));
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_ass_with_default_canvas() {
        let cli = Cli::parse_from(["reel", "ass", "segments.json", "--style", "style.json"]);

        match &cli.command {
            Commands::Ass(crate::ass::Args { input, canvas, .. }) => {
                assert_eq!(input.style.as_deref().and_then(|p| p.to_str()), Some("style.json"));
                assert_eq!((canvas.width, canvas.height), (1080, 1920));
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_burn_command() {
        let cli = Cli::parse_from([
            "reel",
            "burn",
            "clip.mp4",
            "segments.json",
            "--width",
            "720",
            "--height",
            "1280",
        ]);

        match &cli.command {
            Commands::Burn(crate::burn::Args {
                video,
                input,
                output: None,
                format,
                canvas,
                timeout,
            }) => {
                assert_eq!(video.to_str(), Some("clip.mp4"));
                assert_eq!(input.segments.to_str(), Some("segments.json"));
                assert_eq!(format, "mp4");
                assert_eq!((canvas.width, canvas.height), (720, 1280));
                assert_eq!(*timeout, crate::ffmpeg::DEFAULT_TIMEOUT);
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_estimate_command() {
        let cli = Cli::parse_from(["reel", "estimate", "120", "1080", "1920"]);

        assert!(matches!(
            &cli.command,
            Commands::Estimate(crate::estimate::Args { duration, width: 1080, height: 1920, json: false })
            if *duration == 120.0
        ));

        let cli = Cli::parse_from(["reel", "estimate", "--json", "30", "720", "1280"]);
        assert!(matches!(
            &cli.command,
            Commands::Estimate(crate::estimate::Args { json: true, .. })
        ));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["reel", "srt", "s.json", "--mode", "karaoke"]).is_err());
    }
}

//! reelsub: subtitle export and burn-in commands.

pub mod ass;
pub mod burn;
pub mod cli;
pub mod entries;
pub mod estimate;
pub mod ffmpeg;
pub mod input;
pub mod soft;
pub mod srt;

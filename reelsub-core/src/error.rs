//! Error types for reelsub-core organized by input stage.

use thiserror::Error;

/// Error variants for loading transcripts and configuration.
///
/// The transformations themselves are total; only the boundary adapters fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transcript or style JSON could not be decoded
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading input
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration errors (style values, canvas size).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Phrase mode needs at least one word per line
    #[error("invalid words per line: {0} (minimum 1)")]
    InvalidWordsPerLine(usize),

    /// Font size must be a positive finite number
    #[error("invalid font size: {0}px")]
    InvalidFontSize(f64),

    /// Canvas dimensions must be non-zero
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

/// Result type alias for reelsub-core operations.
pub type Result<T> = std::result::Result<T, Error>;

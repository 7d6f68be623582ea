//! Display and style configuration.
//!
//! [`StyleConfig`] mirrors the style object produced by the editor (camelCase
//! JSON). [`DisplayConfig`] is the part of it the entry builder reads, so the
//! preview and every export select entries through the same values.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of words per phrase
pub const DEFAULT_WORDS_PER_LINE: usize = 3;

/// Default canvas width in pixels (portrait short-form video)
pub const DEFAULT_CANVAS_WIDTH: u32 = 1080;

/// Default canvas height in pixels (portrait short-form video)
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1920;

/// Entry granularity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One entry per segment
    #[default]
    Sentence,
    /// One entry per word
    Word,
    /// Short word groups broken at punctuation
    Phrase,
}

/// Configuration read by the entry builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Maximum words per phrase, only used in phrase mode
    pub words_per_line: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            words_per_line: DEFAULT_WORDS_PER_LINE,
        }
    }
}

impl DisplayConfig {
    pub fn new(mode: DisplayMode, words_per_line: usize) -> Self {
        Self {
            mode,
            words_per_line,
        }
    }
}

/// Style configuration as produced by the style editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub display_mode: DisplayMode,
    pub words_per_line: usize,
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Text color as `#RRGGBB`
    pub color: String,
    /// Background box color as `#RRGGBB`
    pub background_color: String,
    /// Background box opacity in `0..=1`
    pub background_opacity: f64,
    /// CSS font weight, e.g. `"400"` or `"700"`
    #[serde(deserialize_with = "string_or_number")]
    pub font_weight: String,
    /// Vertical anchor in percent from the top (`0..=100`)
    pub y_align: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            words_per_line: DEFAULT_WORDS_PER_LINE,
            font_family: "Arial".to_string(),
            font_size: 24.0,
            color: "#FFFFFF".to_string(),
            background_color: "#000000".to_string(),
            background_opacity: 0.5,
            font_weight: "400".to_string(),
            y_align: 80.0,
        }
    }
}

impl StyleConfig {
    /// The display view of this style.
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig::new(self.display_mode, self.words_per_line)
    }

    /// Numeric font weight.
    ///
    /// Accepts numbers and the `normal`/`bold` keywords; anything else is 400.
    pub fn weight(&self) -> u32 {
        let raw = self.font_weight.trim();
        match raw.to_ascii_lowercase().as_str() {
            "bold" => 700,
            "normal" => 400,
            _ => raw
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w >= 0.0)
                .map(|w| w as u32)
                .unwrap_or(400),
        }
    }

    /// Parse and validate an editor style.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Reject values no renderer can honour.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.words_per_line == 0 {
            return Err(ConfigError::InvalidWordsPerLine(self.words_per_line));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

/// Output frame size that ASS geometry is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> std::result::Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_editor_style_json() {
        let json = r##"{
            "displayMode": "phrase",
            "wordsPerLine": 4,
            "fontFamily": "Inter",
            "fontSize": 32,
            "color": "#FFFF00",
            "backgroundColor": "#101010",
            "backgroundOpacity": 0,
            "fontWeight": "700",
            "yAlign": 75
        }"##;

        let style: StyleConfig = serde_json::from_str(json).unwrap();

        assert_eq!(style.display(), DisplayConfig::new(DisplayMode::Phrase, 4));
        assert_eq!(style.font_family, "Inter");
        assert_eq!(style.weight(), 700);
        assert_eq!(style.background_opacity, 0.0);
        assert_eq!(style.y_align, 75.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let style: StyleConfig = serde_json::from_str(r#"{"displayMode": "word"}"#).unwrap();

        assert_eq!(style.display_mode, DisplayMode::Word);
        assert_eq!(style.words_per_line, DEFAULT_WORDS_PER_LINE);
        assert_eq!(style.color, "#FFFFFF");
    }

    #[test]
    fn accepts_numeric_font_weight() {
        let style: StyleConfig = serde_json::from_str(r#"{"fontWeight": 600}"#).unwrap();
        assert_eq!(style.weight(), 600);
    }

    #[test]
    fn weight_keywords_and_garbage() {
        let mut style = StyleConfig::default();

        style.font_weight = "bold".to_string();
        assert_eq!(style.weight(), 700);

        style.font_weight = "normal".to_string();
        assert_eq!(style.weight(), 400);

        style.font_weight = "heavy".to_string();
        assert_eq!(style.weight(), 400);
    }

    #[test]
    fn rejects_zero_words_per_line() {
        let style = StyleConfig {
            words_per_line: 0,
            ..StyleConfig::default()
        };
        assert_eq!(
            style.validate(),
            Err(ConfigError::InvalidWordsPerLine(0))
        );
    }

    #[test]
    fn from_json_validates() {
        assert!(StyleConfig::from_json(r#"{"wordsPerLine": 2}"#).is_ok());
        assert!(matches!(
            StyleConfig::from_json(r#"{"fontSize": -4}"#),
            Err(Error::Config(ConfigError::InvalidFontSize(_)))
        ));
        assert!(matches!(
            StyleConfig::from_json("{"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn rejects_empty_canvas() {
        assert!(Canvas::new(0, 1920).is_err());
        assert_eq!(Canvas::new(720, 1280).unwrap(), Canvas { width: 720, height: 1280 });
        assert_eq!(Canvas::default(), Canvas { width: 1080, height: 1920 });
    }
}

//! ASS subtitle generation for burn-in.
//!
//! [`AssStyle::from_config`] is the only place a [`StyleConfig`] is mapped onto
//! ASS style fields.

use crate::color::hex_to_ass_color;
use crate::config::{Canvas, StyleConfig};
use crate::timecode::format_ass;
use crate::types::Entry;

/// Name of the single style every event refers to.
pub const STYLE_NAME: &str = "Default";

/// Bottom-center numpad alignment.
pub const ALIGNMENT_BOTTOM_CENTER: u8 = 2;

/// Outline plus drop shadow, no box.
pub const BORDER_OUTLINE: u8 = 1;

/// Opaque box behind the text.
pub const BORDER_BOX: u8 = 3;

/// Font weight from which the style is bold.
const BOLD_WEIGHT: u32 = 600;

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Resolved ASS style fields.
#[derive(Clone, Debug, PartialEq)]
pub struct AssStyle {
    pub font_name: String,
    pub font_size: f64,
    pub primary_color: String,
    pub outline_color: String,
    pub back_color: String,
    pub bold: bool,
    pub border_style: u8,
    pub outline: f64,
    pub alignment: u8,
    pub margin_l: u32,
    pub margin_r: u32,
    pub margin_v: u32,
}

impl AssStyle {
    /// Map an editor style onto ASS fields for the given canvas.
    ///
    /// `yAlign` is a percentage from the top while `MarginV` is measured from
    /// the bottom because the alignment is bottom-center.
    pub fn from_config(style: &StyleConfig, canvas: Canvas) -> Self {
        let y_align = if style.y_align.is_finite() {
            style.y_align.clamp(0.0, 100.0)
        } else {
            100.0
        };
        let margin_v = (canvas.height as f64 * (1.0 - y_align / 100.0)).round() as u32;

        let boxed = style.background_opacity > 0.0;
        let back_color = hex_to_ass_color(&style.background_color, style.background_opacity);

        // libass paints the box with the outline colour
        let (border_style, outline_color, outline) = if boxed {
            (BORDER_BOX, back_color.clone(), 4.0)
        } else {
            (BORDER_OUTLINE, hex_to_ass_color("#000000", 1.0), 2.0)
        };

        Self {
            font_name: style.font_family.clone(),
            font_size: style.font_size,
            primary_color: hex_to_ass_color(&style.color, 1.0),
            outline_color,
            back_color,
            bold: style.weight() >= BOLD_WEIGHT,
            border_style,
            outline,
            alignment: ALIGNMENT_BOTTOM_CENTER,
            margin_l: 10,
            margin_r: 10,
            margin_v,
        }
    }

    /// The `Style:` line of the `[V4+ Styles]` section.
    fn to_line(&self) -> String {
        format!(
            "Style: {name},{font},{size},{primary},&H000000FF,{outline_color},{back},{bold},0,0,0,100,100,0,0,{border},{outline},0,{alignment},{margin_l},{margin_r},{margin_v},1",
            name = STYLE_NAME,
            font = self.font_name,
            size = self.font_size,
            primary = self.primary_color,
            outline_color = self.outline_color,
            back = self.back_color,
            bold = u8::from(self.bold),
            border = self.border_style,
            outline = self.outline,
            alignment = self.alignment,
            margin_l = self.margin_l,
            margin_r = self.margin_r,
            margin_v = self.margin_v,
        )
    }
}

/// Generate an ASS document from entries.
pub fn generate_ass(entries: &[Entry], style: &StyleConfig, canvas: Canvas) -> String {
    let ass_style = AssStyle::from_config(style, canvas);
    tracing::debug!(?ass_style, ?canvas, "resolved ass style");

    let mut out = String::new();

    out.push_str("[Script Info]\n");
    out.push_str("ScriptType: v4.00+\n");
    out.push_str(&format!("PlayResX: {}\n", canvas.width));
    out.push_str(&format!("PlayResY: {}\n", canvas.height));
    out.push_str("WrapStyle: 0\n");
    out.push_str("ScaledBorderAndShadow: yes\n\n");

    out.push_str("[V4+ Styles]\n");
    out.push_str(STYLE_FORMAT);
    out.push('\n');
    out.push_str(&ass_style.to_line());
    out.push_str("\n\n");

    out.push_str("[Events]\n");
    out.push_str(EVENT_FORMAT);
    out.push('\n');

    for entry in entries {
        out.push_str(&dialogue_line(entry));
        out.push('\n');
    }

    out
}

/// One `Dialogue:` event for an entry.
fn dialogue_line(entry: &Entry) -> String {
    format!(
        "Dialogue: 0,{start},{end},{STYLE_NAME},,0,0,0,,{text}",
        start = format_ass(entry.start),
        end = format_ass(entry.end),
        text = escape_text(&entry.text),
    )
}

/// Line breaks become `\N`; stray carriage returns are dropped.
fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\\N")
        .replace('\n', "\\N")
        .replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_line(doc: &str) -> &str {
        doc.lines()
            .find(|l| l.starts_with("Style: "))
            .expect("style line")
    }

    fn style_fields(doc: &str) -> Vec<String> {
        style_line(doc)
            .trim_start_matches("Style: ")
            .split(',')
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn writes_header_and_events() {
        let entries = vec![Entry::new("Hello", 0.5, 2.5), Entry::new("World", 62.345, 65.0)];
        let doc = generate_ass(&entries, &StyleConfig::default(), Canvas::default());

        assert!(doc.starts_with("[Script Info]\nScriptType: v4.00+\nPlayResX: 1080\nPlayResY: 1920\n"));
        assert!(doc.contains("\n[V4+ Styles]\n"));
        assert!(doc.contains("\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n"));
        assert!(doc.contains("Dialogue: 0,0:00:00.50,0:00:02.50,Default,,0,0,0,,Hello\n"));
        assert!(doc.ends_with("Dialogue: 0,0:01:02.34,0:01:05.00,Default,,0,0,0,,World\n"));
    }

    #[test]
    fn maps_default_style() {
        let doc = generate_ass(&[], &StyleConfig::default(), Canvas::default());
        let fields = style_fields(&doc);

        assert_eq!(fields[0], "Default");
        assert_eq!(fields[1], "Arial");
        assert_eq!(fields[2], "24");
        assert_eq!(fields[3], "&H00FFFFFF");
        assert_eq!(fields[6], "&H80000000");
        assert_eq!(fields[7], "0");
        assert_eq!(fields[15], "3");
        assert_eq!(fields[18], "2");
        // 1920 * (1 - 0.8)
        assert_eq!(fields[21], "384");
    }

    #[test]
    fn margin_follows_canvas_height() {
        let style = StyleConfig {
            y_align: 50.0,
            ..StyleConfig::default()
        };

        let ass = AssStyle::from_config(&style, Canvas::new(1920, 1080).unwrap());
        assert_eq!(ass.margin_v, 540);

        let top = StyleConfig {
            y_align: 0.0,
            ..StyleConfig::default()
        };
        assert_eq!(AssStyle::from_config(&top, Canvas::default()).margin_v, 1920);
    }

    #[test]
    fn y_align_is_clamped_to_canvas() {
        let margin = |y_align: f64| {
            let style = StyleConfig {
                y_align,
                ..StyleConfig::default()
            };
            AssStyle::from_config(&style, Canvas::default()).margin_v
        };

        assert_eq!(margin(150.0), 0);
        assert_eq!(margin(100.0), 0);
        assert_eq!(margin(-10.0), 1920);
        assert_eq!(margin(f64::INFINITY), 0);
    }

    #[test]
    fn non_numeric_y_align_sits_at_bottom() {
        let style = StyleConfig {
            y_align: f64::NAN,
            ..StyleConfig::default()
        };
        let doc = generate_ass(&[], &style, Canvas::default());

        assert_eq!(AssStyle::from_config(&style, Canvas::default()).margin_v, 0);
        assert_eq!(style_fields(&doc)[21], "0");
    }

    #[test]
    fn bold_from_weight_threshold() {
        for (weight, bold) in [("400", false), ("599", false), ("600", true), ("800", true)] {
            let style = StyleConfig {
                font_weight: weight.to_string(),
                ..StyleConfig::default()
            };
            assert_eq!(AssStyle::from_config(&style, Canvas::default()).bold, bold);
        }
    }

    #[test]
    fn transparent_background_drops_box() {
        let style = StyleConfig {
            background_opacity: 0.0,
            ..StyleConfig::default()
        };
        let ass = AssStyle::from_config(&style, Canvas::default());

        assert_eq!(ass.border_style, BORDER_OUTLINE);
        assert_eq!(ass.back_color, "&HFF000000");
        assert_eq!(ass.outline_color, "&H00000000");
    }

    #[test]
    fn opaque_background_uses_box() {
        let style = StyleConfig {
            background_color: "#336699".to_string(),
            background_opacity: 1.0,
            ..StyleConfig::default()
        };
        let ass = AssStyle::from_config(&style, Canvas::default());

        assert_eq!(ass.border_style, BORDER_BOX);
        assert_eq!(ass.back_color, "&H00996633");
        assert_eq!(ass.outline_color, ass.back_color);
    }

    #[test]
    fn escapes_line_breaks() {
        let entries = vec![Entry::new("one\r\ntwo\nthree\rfour", 0.0, 1.0)];
        let doc = generate_ass(&entries, &StyleConfig::default(), Canvas::default());

        assert!(doc.contains(",,one\\Ntwo\\Nthreefour\n"));
    }

    #[test]
    fn bad_colors_fall_back_to_white() {
        let style = StyleConfig {
            color: "red".to_string(),
            ..StyleConfig::default()
        };
        let ass = AssStyle::from_config(&style, Canvas::default());
        assert_eq!(ass.primary_color, "&H00FFFFFF");
    }
}

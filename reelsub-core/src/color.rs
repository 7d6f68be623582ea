//! Hex color conversion to the ASS `&HAABBGGRR` form.

/// Opaque white, used when a hex color cannot be parsed.
pub const FALLBACK_COLOR: &str = "&H00FFFFFF";

/// Parse `#RRGGBB` (the `#` is optional) into channels.
pub fn parse_hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// ASS alpha byte for an opacity in `0..=1`; `00` is opaque, `FF` transparent.
pub fn alpha_from_opacity(opacity: f64) -> u8 {
    let opacity = if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    ((1.0 - opacity) * 255.0).round() as u8
}

/// Convert a hex color and opacity into an ASS color.
///
/// Malformed input yields [`FALLBACK_COLOR`].
pub fn hex_to_ass_color(hex: &str, opacity: f64) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => {
            let a = alpha_from_opacity(opacity);
            format!("&H{a:02X}{b:02X}{g:02X}{r:02X}")
        }
        None => FALLBACK_COLOR.to_string(),
    }
}

//! Timecode formatting for SRT and ASS.
//!
//! Both formats truncate (floor) to their resolution. Seconds are first snapped
//! to whole microseconds so that decimal inputs such as `61.005` keep their
//! last digit despite binary float representation.

use srtlib::Timestamp;

/// Convert seconds to whole microseconds; negative and non-finite input is 0.
fn to_micros(secs: f64) -> u64 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    (secs * 1_000_000.0).round() as u64
}

/// Convert seconds to whole milliseconds, truncated.
pub fn to_millis(secs: f64) -> u64 {
    to_micros(secs) / 1_000
}

/// Convert seconds to whole centiseconds, truncated.
pub fn to_centis(secs: f64) -> u64 {
    to_micros(secs) / 10_000
}

/// Convert seconds to an SRT timestamp.
///
/// `srtlib` stores hours in a `u8`, so times past
/// [`Timestamp::MAX_TIMESTAMP_MILLIS`] (255:59:59,999) saturate there.
pub fn srt_timestamp(secs: f64) -> Timestamp {
    let millis = to_millis(secs).min(u64::from(Timestamp::MAX_TIMESTAMP_MILLIS));
    Timestamp::from_milliseconds(millis as u32)
}

/// Format seconds as `HH:MM:SS,mmm`; hours widen past 99.
pub fn format_srt(secs: f64) -> String {
    let total_millis = to_millis(secs);
    let millis = total_millis % 1_000;
    let total_seconds = total_millis / 1_000;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Format seconds as `H:MM:SS.cc`.
pub fn format_ass(secs: f64) -> String {
    let total_centis = to_centis(secs);
    let centis = total_centis % 100;
    let total_seconds = total_centis / 100;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_srt_literals() {
        assert_eq!(format_srt(0.0), "00:00:00,000");
        assert_eq!(format_srt(1.5), "00:00:01,500");
        assert_eq!(format_srt(62.345), "00:01:02,345");
        assert_eq!(format_srt(3661.005), "01:01:01,005");
    }

    #[test]
    fn formats_ass_literals() {
        assert_eq!(format_ass(0.0), "0:00:00.00");
        assert_eq!(format_ass(1.5), "0:00:01.50");
        assert_eq!(format_ass(62.345), "0:01:02.34");
        assert_eq!(format_ass(3661.999), "1:01:01.99");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_srt(0.9999), "00:00:00,999");
        assert_eq!(format_ass(0.999), "0:00:00.99");
        assert_eq!(format_srt(61.005), "00:01:01,005");
    }

    #[test]
    fn handles_multi_digit_hours() {
        assert_eq!(format_ass(36_000.0), "10:00:00.00");
        assert_eq!(format_srt(36_000.25), "10:00:00,250");
    }

    #[test]
    fn srt_agrees_with_ass_past_srtlib_range() {
        assert_eq!(format_srt(921_600.0), "256:00:00,000");
        assert_eq!(format_ass(921_600.0), "256:00:00.00");
        assert_eq!(format_srt(1_000_000.5), "277:46:40,500");
        assert_eq!(format_ass(1_000_000.5), "277:46:40.50");
    }

    #[test]
    fn matches_srtlib_rendering_within_range() {
        for secs in [0.0, 1.5, 3661.005, 359_999.999, 921_599.999] {
            assert_eq!(format_srt(secs), srt_timestamp(secs).to_string());
        }
    }

    #[test]
    fn srt_timestamp_saturates_at_srtlib_max() {
        assert_eq!(
            srt_timestamp(1_000_000.0),
            Timestamp::from_milliseconds(Timestamp::MAX_TIMESTAMP_MILLIS)
        );
    }

    #[test]
    fn clamps_negative_and_nan() {
        assert_eq!(format_srt(-1.0), "00:00:00,000");
        assert_eq!(format_ass(f64::NAN), "0:00:00.00");
    }
}

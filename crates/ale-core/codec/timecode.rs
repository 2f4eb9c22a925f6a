//! Timecode and frame-count conversion
//!
//! Converts between `HH:MM:SS:FF` / `HH:MM:SS;FF` text, bare frame counts
//! and [`RationalTime`] values. Drop-frame arithmetic follows the SMPTE
//! convention: at the 29.97 family two frame numbers (four at 59.94) are
//! skipped at the start of every minute except each tenth minute.
//!
//! # Example
//!
//! ```rust
//! use ale_core::codec::timecode::{format_time, parse_time};
//!
//! let start = parse_time("01:00:00:00", 24.0)?;
//! assert_eq!(start.value(), 86_400.0);
//! assert_eq!(format_time(&start, 24.0, false)?, "01:00:00:00");
//!
//! let df = parse_time("00:01:00;02", 29.97)?;
//! assert_eq!(df.value(), 1_800.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use ale_timeline::RationalTime;
use tracing::trace;

use super::DEFAULT_FRAME_RATE;
use crate::{
    utils::{parse_finite, AleError},
    Result,
};

/// Tolerance used when matching drop-frame rates
const DROP_FRAME_TOLERANCE: f64 = 0.01;

/// Whether a rate belongs to the 29.97 or 59.94 drop-frame families
#[must_use]
pub fn is_drop_frame_rate(rate: f64) -> bool {
    (rate - 29.97).abs() < DROP_FRAME_TOLERANCE || (rate - 59.94).abs() < DROP_FRAME_TOLERANCE
}

/// Whole frames per timecode second
fn nominal_fps(rate: f64) -> i64 {
    rate.ceil() as i64
}

/// Frame numbers skipped per minute in drop-frame mode
fn dropped_per_minute(rate: f64) -> i64 {
    (nominal_fps(rate) as f64 * 0.066_666).round() as i64
}

/// Reject rates that cannot carry a timecode
fn check_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(AleError::invalid_frame_rate(
            rate.to_string(),
            "frame rate must be a positive number",
        ))
    }
}

/// Parse strict `HH:MM:SS:FF` or `HH:MM:SS;FF` timecode
///
/// A `;` marker selects drop-frame counting only at drop-frame rates.
///
/// # Errors
///
/// Returns [`AleError::InvalidTimecode`] if the text is not four numeric
/// fields, a field is out of range, it names a dropped frame number, or the
/// frame count does not fit in 64 bits.
pub fn parse_timecode(text: &str, rate: f64) -> Result<RationalTime> {
    check_rate(rate)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AleError::invalid_timecode(text, "empty timecode"));
    }

    let fields: Vec<&str> = text.split([':', ';']).collect();
    if fields.len() != 4 {
        return Err(AleError::invalid_timecode(
            text,
            "expected four fields HH:MM:SS:FF",
        ));
    }

    let mut parts = [0_i64; 4];
    for (slot, field) in parts.iter_mut().zip(&fields) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AleError::invalid_timecode(text, "non-numeric field"));
        }
        *slot = field
            .parse()
            .map_err(|_| AleError::invalid_timecode(text, "field out of range"))?;
    }
    let [hours, minutes, seconds, frames] = parts;

    let nominal = nominal_fps(rate);
    if minutes >= 60 || seconds >= 60 {
        return Err(AleError::invalid_timecode(
            text,
            "minutes and seconds must be below 60",
        ));
    }
    if frames >= nominal {
        return Err(AleError::invalid_timecode(
            text,
            format!("frame number must be below {nominal}"),
        ));
    }

    let out_of_range = || AleError::invalid_timecode(text, "timecode out of range");
    let total_minutes = hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .ok_or_else(out_of_range)?;
    let mut value = total_minutes
        .checked_mul(60)
        .and_then(|s| s.checked_add(seconds))
        .and_then(|s| s.checked_mul(nominal))
        .and_then(|f| f.checked_add(frames))
        .ok_or_else(out_of_range)?;

    if text.contains(';') && is_drop_frame_rate(rate) {
        let dropped = dropped_per_minute(rate);
        if seconds == 0 && frames < dropped && minutes % 10 != 0 {
            return Err(AleError::invalid_timecode(
                text,
                "frame number is skipped in drop-frame timecode",
            ));
        }
        value -= dropped * (total_minutes - total_minutes / 10);
    }

    Ok(RationalTime::from_frames(value as f64, rate))
}

/// Parse a bare decimal frame count
///
/// # Errors
///
/// Returns [`AleError::InvalidTimecode`] if the text is not a finite,
/// non-negative number.
pub fn parse_frames(text: &str, rate: f64) -> Result<RationalTime> {
    check_rate(rate)?;
    let text = text.trim();
    let frames = parse_finite(text)
        .ok_or_else(|| AleError::invalid_timecode(text, "not a frame count"))?;
    if frames < 0.0 {
        return Err(AleError::invalid_timecode(
            text,
            "frame count must not be negative",
        ));
    }
    Ok(RationalTime::from_frames(frames, rate))
}

/// Parse a time field: timecode first, then a bare frame count
///
/// # Errors
///
/// Returns [`AleError::InvalidTimecode`] if the text is empty or neither form parses.
pub fn parse_time(text: &str, rate: f64) -> Result<RationalTime> {
    check_rate(rate)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AleError::invalid_timecode(text, "empty timecode"));
    }

    parse_timecode(text, rate).or_else(|tc_err| {
        trace!(value = text, error = %tc_err, "not a timecode, trying frame count");
        parse_frames(text, rate).map_err(|_| {
            AleError::invalid_timecode(text, "neither a timecode nor a frame count")
        })
    })
}

/// Render a time as timecode at `rate`
///
/// Drop-frame counting is used when requested and `rate` is a drop-frame
/// rate; otherwise non-drop counting is used. The rescaled value is rounded
/// to the nearest frame.
///
/// # Errors
///
/// Returns [`AleError::InvalidTimecode`] for negative times and for times
/// too large to render.
pub fn format_time(time: &RationalTime, rate: f64, drop_frame: bool) -> Result<String> {
    check_rate(rate)?;
    let mut frames = time.to_frames(rate);
    if frames < 0 {
        return Err(AleError::invalid_timecode(
            frames.to_string(),
            "cannot render a negative time as timecode",
        ));
    }

    let drop = drop_frame && is_drop_frame_rate(rate);
    if drop {
        let dropped = dropped_per_minute(rate);
        let per_ten_minutes = nominal_fps(rate) * 600 - dropped * 9;
        let per_minute = nominal_fps(rate) * 60 - dropped;

        let tens = frames / per_ten_minutes;
        let rest = frames % per_ten_minutes;
        let mut skipped = dropped * 9 * tens;
        if rest > dropped {
            skipped += dropped * ((rest - dropped) / per_minute);
        }
        frames = frames.checked_add(skipped).ok_or_else(|| {
            AleError::invalid_timecode(frames.to_string(), "timecode out of range")
        })?;
    }

    let nominal = nominal_fps(rate);
    let ff = frames % nominal;
    let ss = (frames / nominal) % 60;
    let mm = (frames / (nominal * 60)) % 60;
    let hh = frames / (nominal * 3600);
    let separator = if drop { ';' } else { ':' };

    Ok(format!("{hh:02}:{mm:02}:{ss:02}{separator}{ff:02}"))
}

/// Render a duration as a whole frame count at `rate`
#[must_use]
pub fn format_frames(time: &RationalTime, rate: f64) -> String {
    time.to_frames(rate).to_string()
}

/// Parse an `FPS` header value
///
/// An empty value yields the default rate of 24.
///
/// # Errors
///
/// Returns [`AleError::InvalidFrameRate`] for non-numeric, non-finite or
/// non-positive values.
pub fn parse_fps(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DEFAULT_FRAME_RATE);
    }
    let fps = parse_finite(text)
        .ok_or_else(|| AleError::invalid_frame_rate(text, "not a number"))?;
    if fps <= 0.0 {
        return Err(AleError::invalid_frame_rate(text, "must be positive"));
    }
    Ok(fps)
}

/// Render a frame rate for the `FPS` header
#[must_use]
pub fn format_fps(rate: f64) -> String {
    format!("{rate:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_frame_rates() {
        assert!(is_drop_frame_rate(29.97));
        assert!(is_drop_frame_rate(30_000.0 / 1_001.0));
        assert!(is_drop_frame_rate(59.94));
        assert!(!is_drop_frame_rate(30.0));
        assert!(!is_drop_frame_rate(23.976));
    }

    #[test]
    fn non_drop_parse() {
        let t = parse_timecode("01:00:00:00", 24.0).unwrap();
        assert_eq!(t.value(), 86_400.0);
        assert_eq!(t.rate(), 24.0);
        assert_eq!(parse_timecode("00:00:01:12", 25.0).unwrap().value(), 37.0);
    }

    #[test]
    fn drop_frame_parse() {
        assert_eq!(parse_timecode("00:01:00;02", 29.97).unwrap().value(), 1_800.0);
        assert_eq!(parse_timecode("00:10:00;00", 29.97).unwrap().value(), 17_982.0);
        assert_eq!(parse_timecode("01:00:00;00", 29.97).unwrap().value(), 107_892.0);
        assert_eq!(parse_timecode("00:01:00;04", 59.94).unwrap().value(), 3_600.0);
    }

    #[test]
    fn semicolon_at_non_drop_rate_counts_every_frame() {
        assert_eq!(parse_timecode("00:01:00;00", 30.0).unwrap().value(), 1_800.0);
    }

    #[test]
    fn dropped_frame_numbers_are_rejected() {
        let err = parse_timecode("00:01:00;00", 29.97).unwrap_err();
        assert!(matches!(err, AleError::InvalidTimecode { .. }));
        assert!(parse_timecode("00:10:00;00", 29.97).is_ok());
    }

    #[test]
    fn field_validation() {
        for bad in ["", "01:00:00", "01:00:00:00:00", "01:60:00:00", "01:00:60:00", "01:00:00:24", "aa:00:00:00", "01::00:00", "+1:00:00:00"] {
            assert!(parse_timecode(bad, 24.0).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn frames_and_fallback() {
        assert_eq!(parse_frames("120", 24.0).unwrap().value(), 120.0);
        assert_eq!(parse_frames(" 12.5 ", 24.0).unwrap().value(), 12.5);
        assert!(parse_frames("-1", 24.0).is_err());
        assert_eq!(parse_time("120", 24.0).unwrap().value(), 120.0);
        assert_eq!(parse_time("00:00:05:00", 24.0).unwrap().value(), 120.0);

        let err = parse_time("soon", 24.0).unwrap_err();
        assert!(matches!(err, AleError::InvalidTimecode { ref value, .. } if value == "soon"));
        assert!(parse_time("   ", 24.0).is_err());
    }

    #[test]
    fn invalid_rates_are_rejected() {
        assert!(matches!(
            parse_time("00:00:00:00", 0.0),
            Err(AleError::InvalidFrameRate { .. })
        ));
        assert!(format_time(&RationalTime::new(0.0, 24.0), f64::NAN, false).is_err());
    }

    #[test]
    fn format_non_drop() {
        let t = RationalTime::new(86_400.0, 24.0);
        assert_eq!(format_time(&t, 24.0, false).unwrap(), "01:00:00:00");
        assert_eq!(format_time(&t, 24.0, true).unwrap(), "01:00:00:00");
        assert_eq!(format_time(&RationalTime::new(0.0, 24.0), 24.0, false).unwrap(), "00:00:00:00");
    }

    #[test]
    fn format_rescales_and_rounds() {
        let t = RationalTime::new(48.0, 24.0);
        assert_eq!(format_time(&t, 25.0, false).unwrap(), "00:00:02:00");
        let t = RationalTime::new(10.6, 24.0);
        assert_eq!(format_time(&t, 24.0, false).unwrap(), "00:00:00:11");
        assert_eq!(format_frames(&t, 24.0), "11");
    }

    #[test]
    fn format_drop_frame() {
        let rate = 29.97;
        assert_eq!(format_time(&RationalTime::new(1_799.0, rate), rate, true).unwrap(), "00:00:59;29");
        assert_eq!(format_time(&RationalTime::new(1_800.0, rate), rate, true).unwrap(), "00:01:00;02");
        assert_eq!(format_time(&RationalTime::new(17_982.0, rate), rate, true).unwrap(), "00:10:00;00");
        assert_eq!(format_time(&RationalTime::new(107_892.0, rate), rate, true).unwrap(), "01:00:00;00");
        assert_eq!(format_time(&RationalTime::new(1_800.0, rate), rate, false).unwrap(), "00:01:00:00");
    }

    #[test]
    fn negative_time_cannot_be_formatted() {
        let err = format_time(&RationalTime::new(-1.0, 24.0), 24.0, false).unwrap_err();
        assert!(matches!(err, AleError::InvalidTimecode { .. }));
    }

    #[test]
    fn oversized_hours_are_out_of_range() {
        let err = parse_timecode("1000000000000000:00:00:00", 24.0).unwrap_err();
        assert!(matches!(err, AleError::InvalidTimecode { ref reason, .. } if reason == "timecode out of range"));
        assert!(parse_time("9223372036854775807:59:59:23", 24.0).is_err());
    }

    #[test]
    fn oversized_frame_counts_cannot_be_formatted() {
        let huge = parse_frames("1e300", 29.97).unwrap();
        let err = format_time(&huge, 29.97, true).unwrap_err();
        assert!(matches!(err, AleError::InvalidTimecode { .. }));
    }

    #[test]
    fn off_nominal_drop_frame_rate_round_trips() {
        let rate = 29.975;
        assert!(is_drop_frame_rate(rate));
        for frames in [1_799.0, 1_800.0, 17_981.0, 17_982.0, 17_983.0, 107_892.0] {
            let text = format_time(&RationalTime::new(frames, rate), rate, true).unwrap();
            assert_eq!(parse_timecode(&text, rate).unwrap().value(), frames, "{text}");
        }
        assert_eq!(format_time(&RationalTime::new(17_982.0, rate), rate, true).unwrap(), "00:10:00;00");
    }

    #[test]
    fn fps_header() {
        assert_eq!(parse_fps("").unwrap(), 24.0);
        assert_eq!(parse_fps(" 23.976 ").unwrap(), 23.976);
        assert!(matches!(parse_fps("fast"), Err(AleError::InvalidFrameRate { .. })));
        assert!(parse_fps("0").is_err());
        assert!(parse_fps("-25").is_err());
        assert_eq!(format_fps(24.0), "24.00");
        assert_eq!(format_fps(29.97), "29.97");
        assert_eq!(format_fps(23.976), "23.98");
    }
}

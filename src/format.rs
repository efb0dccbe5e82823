use crate::angles::fixhour;
use crate::error::PrayTimesError;
use crate::types::{TimeFormat, TimeValue};

pub const INVALID_TIME: &str = "-----";
pub const TIME_SUFFIXES: [&str; 2] = ["am", "pm"];

pub fn format_time(hour: f64, format: TimeFormat) -> TimeValue {
    format_time_with_suffixes(hour, format, TIME_SUFFIXES)
}

pub fn format_time_with_suffixes(hour: f64, format: TimeFormat, suffixes: [&str; 2]) -> TimeValue {
    if hour.is_nan() {
        return TimeValue::Text(INVALID_TIME.to_string());
    }
    if format == TimeFormat::Float {
        return TimeValue::Float(hour);
    }

    // half a minute so the truncation below rounds to nearest
    let time = fixhour(hour + 0.5 / 60.0);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor() as u32;
    let hours = hours as u32;

    let text = match format {
        TimeFormat::H12 => {
            let suffix = suffixes[if hours < 12 { 0 } else { 1 }];
            format!("{}:{:02}{}", (hours + 11) % 12 + 1, minutes, suffix)
        }
        _ => format!("{:02}:{:02}", hours, minutes),
    };
    TimeValue::Text(text)
}

/// Renders a minute-of-day count as `HH:MM`, wrapping into one day first.
pub fn format_minutes(minutes_of_day: i64) -> String {
    let (h, m) = minutes_to_time(minutes_of_day.rem_euclid(1440));
    format!("{:02}:{:02}", h, m)
}

pub fn parse_hhmm(s: &str) -> Result<(u32, u32), PrayTimesError> {
    let invalid = || PrayTimesError::InvalidTime {
        value: s.to_string(),
    };
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok((hours, minutes))
}

pub fn minutes_to_time(total_minutes: i64) -> (i64, i64) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i64, i64)) -> i64 {
    time.0 * 60 + time.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_minute() {
        assert_eq!(format_time(7.43338612866878, TimeFormat::H24).to_string(), "07:26");
        assert_eq!(format_time(5.0 + 29.6 / 60.0, TimeFormat::H24).to_string(), "05:30");
        assert_eq!(format_time(23.999, TimeFormat::H24).to_string(), "00:00");
    }

    #[test]
    fn wraps_out_of_range_hours() {
        assert_eq!(format_time(24.575467938538885, TimeFormat::H24).to_string(), "00:35");
        assert_eq!(format_time(-1.5, TimeFormat::H24).to_string(), "22:30");
    }

    #[test]
    fn twelve_hour() {
        assert_eq!(format_time(0.25, TimeFormat::H12).to_string(), "12:15am");
        assert_eq!(format_time(12.5, TimeFormat::H12).to_string(), "12:30pm");
        assert_eq!(format_time(19.05, TimeFormat::H12).to_string(), "7:03pm");
    }

    #[test]
    fn nan_is_marker_in_every_mode() {
        for f in [TimeFormat::H24, TimeFormat::H12, TimeFormat::Float] {
            assert!(format_time(f64::NAN, f).is_invalid());
        }
    }

    #[test]
    fn float_mode_passes_raw_value() {
        assert_eq!(format_time(24.5, TimeFormat::Float), TimeValue::Float(24.5));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_hhmm("07:26"), Ok((7, 26)));
        assert!(parse_hhmm(INVALID_TIME).is_err());
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("7.26").is_err());
    }

    #[test]
    fn minutes_roundtrip() {
        for m in [0, 1, 59, 60, 405, 870, 1110, 1400, 1439] {
            assert_eq!(time_to_minutes(minutes_to_time(m)), m);
        }
        assert_eq!(format_minutes(1440 + 65), "01:05");
        assert_eq!(format_minutes(-15), "23:45");
    }
}

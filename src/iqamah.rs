//! Congregation (iqamah) times derived from the published prayer start times.
//!
//! These are scheduling conventions, not astronomy: each rule rounds an anchor time to a
//! quarter hour (or five minutes for maghrib) with fixed floors and ceilings.

use crate::format::{format_minutes, parse_hhmm, INVALID_TIME};
use crate::types::{FormattedTimes, IqamahTimes, PrayerName, TimeValue};

/// Latest fajr iqamah, 06:45.
pub const FAJR_IQAMAH_LATEST: i64 = 405;
/// Earliest asr iqamah, 14:30.
pub const ASR_IQAMAH_EARLIEST: i64 = 870;
/// Earliest isha iqamah, 18:30.
pub const ISHA_IQAMAH_EARLIEST: i64 = 1110;
/// Latest isha iqamah, 23:20.
pub const ISHA_IQAMAH_LATEST: i64 = 1400;

type Clock = (u32, u32);

fn quarters(h: u32, m: u32) -> f64 {
    4.0 * h as f64 + m as f64 / 15.0
}

/// Last quarter hour at least 33 minutes before sunrise, capped at 06:45. Minutes of day.
pub fn fajr_iqamah((h, m): Clock) -> i64 {
    let slot = (15.0 * (quarters(h, m) - 33.0 / 15.0).floor()) as i64;
    slot.min(FAJR_IQAMAH_LATEST)
}

/// Twenty past the hour, rolling to the next hour once dhuhr reaches xx:40. Minutes of day.
pub fn dhuhr_iqamah((h, m): Clock) -> i64 {
    let hour = (h as f64 + m as f64 / 60.0 + 1.0 / 3.0).floor() as i64;
    hour * 60 + 20
}

pub fn asr_iqamah((h, m): Clock) -> i64 {
    let slot = (15.0 * (quarters(h, m) + 7.0 / 15.0).ceil()) as i64;
    slot.max(ASR_IQAMAH_EARLIEST)
}

pub fn maghrib_iqamah((h, m): Clock) -> i64 {
    (5.0 * ((12.0 * h as f64 + m as f64 / 5.0) + 1.0).ceil()) as i64
}

pub fn isha_iqamah((h, m): Clock) -> i64 {
    let slot = (15.0 * (quarters(h, m) + 7.0 / 15.0).ceil()) as i64;
    slot.clamp(ISHA_IQAMAH_EARLIEST, ISHA_IQAMAH_LATEST)
}

fn anchor(times: &FormattedTimes, name: PrayerName) -> Option<Clock> {
    match times.get(name) {
        TimeValue::Text(s) => parse_hhmm(s).ok(),
        TimeValue::Float(_) => None,
    }
}

fn render(clock: Option<Clock>, rule: fn(Clock) -> i64) -> String {
    match clock {
        Some(c) => format_minutes(rule(c)),
        None => INVALID_TIME.to_string(),
    }
}

/// Derives the five iqamah times from 24h-formatted prayer times. An anchor that is the
/// invalid marker yields the invalid marker for its iqamah.
pub fn calculate_iqamah_times(times: &FormattedTimes) -> IqamahTimes {
    IqamahTimes {
        fajr: render(anchor(times, PrayerName::Sunrise), fajr_iqamah),
        dhuhr: render(anchor(times, PrayerName::Dhuhr), dhuhr_iqamah),
        asr: render(anchor(times, PrayerName::Asr), asr_iqamah),
        maghrib: render(anchor(times, PrayerName::Maghrib), maghrib_iqamah),
        isha: render(anchor(times, PrayerName::Isha), isha_iqamah),
    }
}

//! Month tables and "what's next" lookups built on top of the engine.

use chrono::{Datelike, Months, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;
use rayon::prelude::*;

use crate::dst::{zone_offset, ZoneOffset};
use crate::engine::PrayTimes;
use crate::error::PrayTimesError;
use crate::format::{parse_hhmm, time_to_minutes};
use crate::types::{DailyTimes, Location, PrayerName, TimeFormat};

/// Length of a Gregorian month: the day before the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, PrayTimesError> {
    if !(1..=12).contains(&month) {
        return Err(PrayTimesError::InvalidMonth { month });
    }
    let last = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .ok_or(PrayTimesError::InvalidDate { year, month, day: 1 })?;
    Ok(last.day())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub offset: ZoneOffset,
    pub times: DailyTimes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTable {
    pub year: i32,
    pub month: u32,
    pub zone: Tz,
    pub days: Vec<DayEntry>,
}

/// Computes every day of a month. The zone offset is resolved per day, so a DST change in
/// the middle of the month only moves the days after it.
pub fn month(
    engine: &PrayTimes,
    year: i32,
    month: u32,
    location: Location,
    zone: Tz,
    format: Option<TimeFormat>,
) -> Result<MonthTable, PrayTimesError> {
    let n_days = days_in_month(year, month)?;
    let dates = (1..=n_days)
        .map(|day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(PrayTimesError::InvalidDate { year, month, day })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let days: Vec<DayEntry> = dates
        .par_iter()
        .map(|&date| day(engine, date, location, zone, format))
        .collect();

    tracing::debug!(year, month, zone = %zone, days = days.len(), "computed month table");
    Ok(MonthTable {
        year,
        month,
        zone,
        days,
    })
}

pub fn day(
    engine: &PrayTimes,
    date: NaiveDate,
    location: Location,
    zone: Tz,
    format: Option<TimeFormat>,
) -> DayEntry {
    let offset = zone_offset(date, zone);
    let times = engine.get_prayer_and_iqamah_times(
        date,
        location,
        offset.total_hours(),
        false,
        format,
    );
    DayEntry {
        date,
        offset,
        times,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub time: String,
    pub iqamah: Option<String>,
}

/// First event of `day` strictly after `now`, walking events in their daily order.
///
/// Compares against the 24h anchors, so any display format works; the returned `time` is
/// the display value. Invalid entries are skipped.
pub fn next_prayer(day: &DailyTimes, now: NaiveTime) -> Option<NextPrayer> {
    let now_minutes = time_to_minutes((now.hour() as i64, now.minute() as i64));
    PrayerName::ALL.into_iter().find_map(|name| {
        let (h, m) = parse_hhmm(day.anchors.get(name).as_str()?).ok()?;
        if time_to_minutes((h as i64, m as i64)) <= now_minutes {
            return None;
        }
        Some(NextPrayer {
            name,
            time: day.prayers.get(name).to_string(),
            iqamah: name.iqamah().map(|iq| day.iqamah.get(iq).to_string()),
        })
    })
}

//! Zone offsets from the IANA database. The engine only ever sees the resulting hours.

use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::PrayTimesError;

/// UTC offset in effect for a zone on a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneOffset {
    /// Standard offset, hours east of UTC.
    pub base_hours: f64,
    /// Daylight-saving shift on top of the standard offset, in hours.
    pub dst_hours: f64,
}

impl ZoneOffset {
    pub fn is_dst(&self) -> bool {
        self.dst_hours != 0.0
    }

    pub fn total_hours(&self) -> f64 {
        self.base_hours + self.dst_hours
    }
}

pub fn parse_zone(name: &str) -> Result<Tz, PrayTimesError> {
    name.parse::<Tz>()
        .map_err(|_| PrayTimesError::UnknownTimezone {
            name: name.to_string(),
        })
}

/// Offset at local noon of `date`, which keeps clear of midnight DST transitions.
pub fn zone_offset(date: NaiveDate, zone: Tz) -> ZoneOffset {
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    let offset = zone
        .offset_from_local_datetime(&noon)
        .earliest()
        .unwrap_or_else(|| zone.offset_from_utc_datetime(&noon));

    ZoneOffset {
        base_hours: offset.base_utc_offset().num_seconds() as f64 / 3600.0,
        dst_hours: offset.dst_offset().num_seconds() as f64 / 3600.0,
    }
}

pub fn zone_offset_by_name(date: NaiveDate, name: &str) -> Result<ZoneOffset, PrayTimesError> {
    Ok(zone_offset(date, parse_zone(name)?))
}

pub fn is_dst(date: NaiveDate, name: &str) -> Result<bool, PrayTimesError> {
    Ok(zone_offset_by_name(date, name)?.is_dst())
}

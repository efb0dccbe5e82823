//! Error types for the praytimes crate.

/// Error type for the fallible edges of the crate.
///
/// The astronomical pipeline itself never fails: unsolvable events flow through as NaN and
/// come out as the invalid-time marker. Errors only arise where callers hand in names, dates
/// or clock strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrayTimesError {
    /// Returned when a timezone name is not in the zone database.
    #[error("unknown timezone {name:?}")]
    UnknownTimezone {
        /// The name that failed to resolve.
        name: String,
    },

    /// Returned when a year/month/day triple is not a calendar date.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The invalid month.
        month: u32,
    },

    /// Returned when a clock string is not `HH:MM`.
    #[error("invalid clock time {value:?}")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },
}

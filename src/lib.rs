pub mod angles;
pub mod dst;
pub mod engine;
pub mod error;
pub mod format;
pub mod high_latitude;
pub mod iqamah;
pub mod methods;
pub mod settings;
pub mod solver;
pub mod timetable;
pub mod types;

pub use angles::{
    darccos, darccot, darcsin, darctan, darctan2, dcos, deg_to_rad, dsin, dtan, fix, fixangle,
    fixhour, julian_day, rad_to_deg, rise_set_angle, sun_position, time_diff, DEGREES_PER_HOUR,
};

pub use dst::{is_dst, parse_zone, zone_offset, zone_offset_by_name, ZoneOffset};
pub use engine::PrayTimes;
pub use error::PrayTimesError;
pub use format::{format_minutes, format_time, parse_hhmm, INVALID_TIME};
pub use high_latitude::{adjust_high_lats, night_portion};
pub use iqamah::calculate_iqamah_times;
pub use methods::{registry, CalculationMethod, Method, MethodParams, MethodRegistry};
pub use settings::{eval_spec, is_min, Offsets, Settings, SettingsPatch};
pub use solver::{TimeSolver, SEED_TIMES};
pub use timetable::{days_in_month, next_prayer, DayEntry, MonthTable, NextPrayer};

pub use types::{
    AngleSpec, AsrJuristic, DailyTimes, Direction, FormattedTimes, HighLatMethod, IqamahName,
    IqamahTimes, Location, MidnightMode, PrayerName, PrayerTimes, RawSpec, SunPosition,
    TimeFormat, TimeValue,
};

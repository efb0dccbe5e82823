//! The public calculator: settings in, formatted prayer and iqamah times out.

use chrono::{Datelike, NaiveDate};

use crate::format::format_time;
use crate::high_latitude::adjust_high_lats;
use crate::iqamah::calculate_iqamah_times;
use crate::methods::{registry, Method, MethodRegistry};
use crate::settings::{Offsets, Settings, SettingsPatch};
use crate::solver::{add_midnight, adjust_for_timezone, apply_minute_overrides, tune_times, TimeSolver};
use crate::types::{DailyTimes, FormattedTimes, Location, PrayerName, PrayerTimes, TimeFormat};

/// Prayer-time calculator. Each instance owns its settings; clone it to run differently
/// configured calculations side by side.
///
/// ```
/// use chrono::NaiveDate;
/// use praytimes::{Method, PrayTimes};
///
/// let pt = PrayTimes::new(Method::Isna);
/// let date = NaiveDate::from_ymd_opt(2011, 2, 9).unwrap();
/// let times = pt.get_times(date, (43.0, -80.0), -5.0, false, None);
/// assert_eq!(times.get(praytimes::PrayerName::Sunrise).to_string(), "07:26");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrayTimes {
    settings: Settings,
}

impl PrayTimes {
    pub fn new(method: Method) -> Self {
        Self {
            settings: Settings::new(method),
        }
    }

    /// Builds from a catalog name; unknown names fall back to MWL.
    pub fn from_name(name: &str) -> Self {
        Self::new(Method::from_name_or_default(name))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn set_method(&mut self, method: Method) {
        self.settings.set_method(method);
    }

    pub fn set_method_by_name(&mut self, name: &str) {
        self.set_method(Method::from_name_or_default(name));
    }

    pub fn adjust(&mut self, patch: SettingsPatch) {
        self.settings.adjust(&patch);
    }

    pub fn tune<I>(&mut self, offsets: I)
    where
        I: IntoIterator<Item = (PrayerName, f64)>,
    {
        self.settings.tune(offsets);
    }

    pub fn method(&self) -> Method {
        self.settings.method()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn offsets(&self) -> &Offsets {
        self.settings.offsets()
    }

    pub fn defaults(&self) -> &'static MethodRegistry {
        registry()
    }

    /// Unformatted zone clock hours, after high-latitude correction, minute rules and tuning.
    pub fn compute(
        &self,
        date: NaiveDate,
        location: impl Into<Location>,
        timezone: f64,
        dst: bool,
    ) -> PrayerTimes {
        let location = location.into();
        let s = &self.settings;
        let timezone = timezone + if dst { 1.0 } else { 0.0 };

        let solver = TimeSolver::new(s, location, date.year(), date.month(), date.day());
        let times = solver.compute();
        let times = adjust_for_timezone(times, timezone, location.longitude);
        let times = adjust_high_lats(times, s);
        let times = apply_minute_overrides(times, s);
        let times = add_midnight(times, s.midnight);
        let times = tune_times(times, s.offsets());

        tracing::debug!(
            %date,
            latitude = location.latitude,
            longitude = location.longitude,
            timezone,
            method = %s.method(),
            "computed prayer times"
        );
        times
    }

    /// Formatted times; `format` overrides the configured format for this call only.
    pub fn get_times(
        &self,
        date: NaiveDate,
        location: impl Into<Location>,
        timezone: f64,
        dst: bool,
        format: Option<TimeFormat>,
    ) -> FormattedTimes {
        let times = self.compute(date, location, timezone, dst);
        format_all(&times, format.unwrap_or(self.settings.time_format))
    }

    /// Prayer times plus the five iqamah times. Iqamah rules always read 24h anchors,
    /// whatever display format is requested.
    pub fn get_prayer_and_iqamah_times(
        &self,
        date: NaiveDate,
        location: impl Into<Location>,
        timezone: f64,
        dst: bool,
        format: Option<TimeFormat>,
    ) -> DailyTimes {
        let times = self.compute(date, location, timezone, dst);
        let format = format.unwrap_or(self.settings.time_format);
        let anchors = format_all(&times, TimeFormat::H24);
        let iqamah = calculate_iqamah_times(&anchors);
        let prayers = if format == TimeFormat::H24 {
            anchors.clone()
        } else {
            format_all(&times, format)
        };
        DailyTimes {
            prayers,
            anchors,
            iqamah,
        }
    }
}

fn format_all(times: &PrayerTimes, format: TimeFormat) -> FormattedTimes {
    FormattedTimes::new(PrayerName::ALL.map(|name| format_time(times.get(name), format)))
}

//! Sun-angle solving and the fixed-point pass that turns seed guesses into event times.

use crate::angles::{
    darccos, darccot, dcos, dsin, dtan, fixhour, julian_day, rise_set_angle, sun_position,
    time_diff, DEGREES_PER_HOUR,
};
use crate::settings::{Offsets, Settings};
use crate::types::{Direction, Location, MidnightMode, PrayerName, PrayerTimes};

/// Starting guesses in clock hours. Each event's declination is evaluated at its own
/// estimated time, so these pick the branch the relaxation converges to.
pub const SEED_TIMES: PrayerTimes = PrayerTimes {
    imsak: 5.0,
    fajr: 5.0,
    sunrise: 6.0,
    dhuhr: 12.0,
    asr: 13.0,
    sunset: 18.0,
    maghrib: 18.0,
    isha: 18.0,
    midnight: f64::NAN,
};

pub struct TimeSolver<'a> {
    settings: &'a Settings,
    location: Location,
    jdate: f64,
}

impl<'a> TimeSolver<'a> {
    pub fn new(settings: &'a Settings, location: Location, year: i32, month: u32, day: u32) -> Self {
        let jdate = julian_day(year, month, day) - location.longitude / (DEGREES_PER_HOUR * 24.0);
        Self {
            settings,
            location,
            jdate,
        }
    }

    /// Julian day shifted toward local solar time by the observer's longitude.
    pub fn jdate(&self) -> f64 {
        self.jdate
    }

    pub fn mid_day(&self, day_fraction: f64) -> f64 {
        let eqt = sun_position(self.jdate + day_fraction).equation_of_time;
        fixhour(12.0 - eqt)
    }

    /// Clock hour (local solar) at which the sun sits `angle` degrees below the horizon.
    /// NaN when the sun never reaches that altitude on this day.
    pub fn sun_angle_time(&self, angle: f64, day_fraction: f64, direction: Direction) -> f64 {
        let decl = sun_position(self.jdate + day_fraction).declination;
        let noon = self.mid_day(day_fraction);
        let lat = self.location.latitude;
        let cos_h = (-dsin(angle) - dsin(decl) * dsin(lat)) / (dcos(decl) * dcos(lat));
        if !(-1.0..=1.0).contains(&cos_h) {
            return f64::NAN;
        }
        let t = darccos(cos_h) / DEGREES_PER_HOUR;
        match direction {
            Direction::Ccw => noon - t,
            Direction::Cw => noon + t,
        }
    }

    pub fn asr_time(&self, factor: f64, day_fraction: f64) -> f64 {
        let decl = sun_position(self.jdate + day_fraction).declination;
        let angle = -darccot(factor + dtan((self.location.latitude - decl).abs()));
        self.sun_angle_time(angle, day_fraction, Direction::Cw)
    }

    /// One relaxation step: re-solves every event using its current estimate (clock hours).
    pub fn compute_iteration(&self, times: &PrayerTimes) -> PrayerTimes {
        let s = self.settings;
        let t = times.map(|_, h| h / 24.0);
        let rise_set = rise_set_angle(self.location.elevation);

        PrayerTimes {
            imsak: self.sun_angle_time(s.imsak.value(), t.imsak, Direction::Ccw),
            fajr: self.sun_angle_time(s.fajr.value(), t.fajr, Direction::Ccw),
            sunrise: self.sun_angle_time(rise_set, t.sunrise, Direction::Ccw),
            dhuhr: self.mid_day(t.dhuhr),
            asr: self.asr_time(s.asr.factor(), t.asr),
            sunset: self.sun_angle_time(rise_set, t.sunset, Direction::Cw),
            maghrib: self.sun_angle_time(s.maghrib.value(), t.maghrib, Direction::Cw),
            isha: self.sun_angle_time(s.isha.value(), t.isha, Direction::Cw),
            midnight: f64::NAN,
        }
    }

    /// Seeds, then `settings.iterations` relaxation steps. Times are local solar hours.
    pub fn compute(&self) -> PrayerTimes {
        let mut times = SEED_TIMES;
        for _ in 0..self.settings.iterations {
            times = self.compute_iteration(&times);
        }
        tracing::trace!(jdate = self.jdate, ?times, "raw solar times");
        times
    }
}

/// Shifts local solar hours to zone clock hours.
pub fn adjust_for_timezone(times: PrayerTimes, timezone: f64, longitude: f64) -> PrayerTimes {
    let shift = timezone - longitude / DEGREES_PER_HOUR;
    times.map(|_, h| h + shift)
}

/// Rewrites minute-based events as minutes before their anchors, and applies the dhuhr
/// offset.
///
/// Isha chains off maghrib *after* maghrib's own rewrite.
pub fn apply_minute_overrides(mut times: PrayerTimes, settings: &Settings) -> PrayerTimes {
    if settings.imsak.is_minutes() {
        times.imsak = times.fajr - settings.imsak.value() / 60.0;
    }
    if settings.maghrib.is_minutes() {
        times.maghrib = times.sunset - settings.maghrib.value() / 60.0;
    }
    if settings.isha.is_minutes() {
        times.isha = times.maghrib - settings.isha.value() / 60.0;
    }
    times.dhuhr += settings.dhuhr.value() / 60.0;
    times
}

pub fn add_midnight(mut times: PrayerTimes, mode: MidnightMode) -> PrayerTimes {
    let end = match mode {
        MidnightMode::Jafari => times.fajr,
        MidnightMode::Standard => times.sunrise,
    };
    times.midnight = times.sunset + time_diff(times.sunset, end) / 2.0;
    times
}

pub fn tune_times(times: PrayerTimes, offsets: &Offsets) -> PrayerTimes {
    times.map(|name: PrayerName, h| h + offsets.get(name) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;
    use crate::types::AngleSpec;

    fn toronto() -> Location {
        Location::new(43.0, -80.0)
    }

    #[test]
    fn unreachable_angle_is_nan() {
        let settings = Settings::new(Method::Mwl);
        let solver = TimeSolver::new(&settings, Location::new(69.65, 18.96), 2023, 6, 21);
        assert!(solver.sun_angle_time(18.0, 0.1, Direction::Ccw).is_nan());
        assert!(!solver.mid_day(0.5).is_nan());
    }

    #[test]
    fn ccw_is_before_noon() {
        let settings = Settings::new(Method::Mwl);
        let solver = TimeSolver::new(&settings, toronto(), 2011, 2, 9);
        let noon = solver.mid_day(0.5);
        assert!(solver.sun_angle_time(0.833, 0.25, Direction::Ccw) < noon);
        assert!(solver.sun_angle_time(0.833, 0.75, Direction::Cw) > noon);
    }

    #[test]
    fn isha_minutes_chain_from_rewritten_maghrib() {
        let mut settings = Settings::new(Method::Mwl);
        settings.maghrib = AngleSpec::Minutes(5.0);
        settings.isha = AngleSpec::Minutes(90.0);
        let mut times = SEED_TIMES;
        times.sunset = 18.0;
        let out = apply_minute_overrides(times, &settings);
        assert!((out.maghrib - (18.0 - 5.0 / 60.0)).abs() < 1e-12);
        assert!((out.isha - (18.0 - 95.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_minute_maghrib_stays_on_sunset() {
        let settings = Settings::new(Method::Isna);
        let mut times = SEED_TIMES;
        times.sunset = 19.5;
        times.isha = 21.0;
        let out = apply_minute_overrides(times, &settings);
        assert_eq!(out.maghrib, 19.5);
        assert_eq!(out.isha, 21.0);
    }

    #[test]
    fn midnight_wraps_past_zero() {
        let mut times = SEED_TIMES;
        times.sunset = 20.0;
        times.sunrise = 6.0;
        times.fajr = 4.0;
        let standard = add_midnight(times, MidnightMode::Standard);
        assert!((standard.midnight - 25.0).abs() < 1e-12);
        let jafari = add_midnight(times, MidnightMode::Jafari);
        assert!((jafari.midnight - 24.0).abs() < 1e-12);
    }
}

//! Night-portion clamping for latitudes where twilight angles are never reached.

use crate::angles::time_diff;
use crate::settings::Settings;
use crate::types::{Direction, HighLatMethod, PrayerTimes};

/// Fraction of the night (sunset to sunrise) an event may sit away from its anchor.
pub fn night_portion(method: HighLatMethod, angle: f64, night: f64) -> f64 {
    let portion = match method {
        HighLatMethod::AngleBased => angle / 60.0,
        HighLatMethod::OneSeventh => 1.0 / 7.0,
        HighLatMethod::NightMiddle | HighLatMethod::None => 0.5,
    };
    portion * night
}

/// Pulls `time` back to `base -/+ portion` when it is undefined or further from its anchor
/// than the allowed night portion.
pub fn adjust_time(
    method: HighLatMethod,
    time: f64,
    base: f64,
    angle: f64,
    night: f64,
    direction: Direction,
) -> f64 {
    let portion = night_portion(method, angle, night);
    let diff = match direction {
        Direction::Ccw => time_diff(time, base),
        Direction::Cw => time_diff(base, time),
    };
    if time.is_nan() || diff > portion {
        match direction {
            Direction::Ccw => base - portion,
            Direction::Cw => base + portion,
        }
    } else {
        time
    }
}

/// Applies the configured strategy to imsak, fajr, isha and maghrib. No-op for `None`.
pub fn adjust_high_lats(mut times: PrayerTimes, settings: &Settings) -> PrayerTimes {
    let method = settings.high_lats;
    if method == HighLatMethod::None {
        return times;
    }
    let night = time_diff(times.sunset, times.sunrise);

    times.imsak = adjust_time(
        method,
        times.imsak,
        times.sunrise,
        settings.imsak.value(),
        night,
        Direction::Ccw,
    );
    times.fajr = adjust_time(
        method,
        times.fajr,
        times.sunrise,
        settings.fajr.value(),
        night,
        Direction::Ccw,
    );
    times.isha = adjust_time(
        method,
        times.isha,
        times.sunset,
        settings.isha.value(),
        night,
        Direction::Cw,
    );
    times.maghrib = adjust_time(
        method,
        times.maghrib,
        times.sunset,
        settings.maghrib.value(),
        night,
        Direction::Cw,
    );
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portions() {
        assert_eq!(night_portion(HighLatMethod::NightMiddle, 18.0, 10.0), 5.0);
        assert_eq!(night_portion(HighLatMethod::AngleBased, 18.0, 10.0), 3.0);
        assert!((night_portion(HighLatMethod::OneSeventh, 18.0, 7.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nan_is_clamped() {
        let t = adjust_time(HighLatMethod::NightMiddle, f64::NAN, 3.0, 18.0, 4.0, Direction::Ccw);
        assert_eq!(t, 1.0);
        let t = adjust_time(HighLatMethod::AngleBased, f64::NAN, 21.0, 18.0, 4.0, Direction::Cw);
        assert!((t - 22.2).abs() < 1e-12);
    }

    #[test]
    fn in_range_is_untouched() {
        let t = adjust_time(HighLatMethod::NightMiddle, 5.5, 6.0, 18.0, 10.0, Direction::Ccw);
        assert_eq!(t, 5.5);
    }
}

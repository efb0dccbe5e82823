use crate::types::SunPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2451545.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

// ── Degree-based trigonometry ──

pub fn dsin(d: f64) -> f64 {
    deg_to_rad(d).sin()
}

pub fn dcos(d: f64) -> f64 {
    deg_to_rad(d).cos()
}

pub fn dtan(d: f64) -> f64 {
    deg_to_rad(d).tan()
}

pub fn darcsin(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

pub fn darccos(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn darctan(x: f64) -> f64 {
    rad_to_deg(x.atan())
}

pub fn darccot(x: f64) -> f64 {
    rad_to_deg((1.0 / x).atan())
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

// ── Range reduction ──

/// Reduces `a` into `[0, modulus)`. NaN passes through untouched so that an
/// unsolvable event stays unsolvable instead of turning into a plausible clock time.
pub fn fix(a: f64, modulus: f64) -> f64 {
    if a.is_nan() {
        return a;
    }
    let a = a - modulus * (a / modulus).floor();
    if a < 0.0 {
        a + modulus
    } else {
        a
    }
}

pub fn fixangle(angle: f64) -> f64 {
    fix(angle, 360.0)
}

pub fn fixhour(hour: f64) -> f64 {
    fix(hour, 24.0)
}

/// Forward distance in hours from `earlier` to `later`, wrapping past midnight.
pub fn time_diff(earlier: f64, later: f64) -> f64 {
    fixhour(later - earlier)
}

// ── Julian day and sun position ──

/// Gregorian calendar date to Julian day (Meeus, Astronomical Algorithms ch. 7).
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Solar declination (degrees) and equation of time (hours) for a Julian day.
///
/// Low-precision USNO approximation, good to about a minute of time for dates within a
/// couple of centuries of J2000.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;
    let g = fixangle(357.529 + 0.98560028 * d);
    let q = fixangle(280.459 + 0.98564736 * d);
    let l = fixangle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

    let e = 23.439 - 0.00000036 * d;

    let ra = darctan2(dcos(e) * dsin(l), dcos(l)) / DEGREES_PER_HOUR;
    let equation_of_time = q / DEGREES_PER_HOUR - fixhour(ra);
    let declination = darcsin(dsin(e) * dsin(l));

    SunPosition {
        declination,
        equation_of_time,
    }
}

/// Altitude below the horizon at which the upper limb touches it, corrected for observer
/// elevation in meters.
pub fn rise_set_angle(elevation: f64) -> f64 {
    0.833 + 0.0347 * elevation.max(0.0).sqrt()
}

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::settings::{eval_spec, is_min};

/// Canonical daily events, in the order they occur through one night-to-night cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl PrayerName {
    pub const ALL: [PrayerName; 9] = [
        PrayerName::Imsak,
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Sunset,
        PrayerName::Maghrib,
        PrayerName::Isha,
        PrayerName::Midnight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            PrayerName::Imsak => "imsak",
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Sunset => "sunset",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
            PrayerName::Midnight => "midnight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrayerName::Imsak => "Imsak",
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Sunset => "Sunset",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
            PrayerName::Midnight => "Midnight",
        }
    }

    /// The congregation time attached to this event, if it has one.
    pub fn iqamah(self) -> Option<IqamahName> {
        match self {
            PrayerName::Fajr => Some(IqamahName::Fajr),
            PrayerName::Dhuhr => Some(IqamahName::Dhuhr),
            PrayerName::Asr => Some(IqamahName::Asr),
            PrayerName::Maghrib => Some(IqamahName::Maghrib),
            PrayerName::Isha => Some(IqamahName::Isha),
            _ => None,
        }
    }
}

impl FromStr for PrayerName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrayerName::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown prayer name {s:?}"))
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IqamahName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl IqamahName {
    pub const ALL: [IqamahName; 5] = [
        IqamahName::Fajr,
        IqamahName::Dhuhr,
        IqamahName::Asr,
        IqamahName::Maghrib,
        IqamahName::Isha,
    ];

    pub fn key(self) -> &'static str {
        match self {
            IqamahName::Fajr => "fajr_iqamah",
            IqamahName::Dhuhr => "dhuhr_iqamah",
            IqamahName::Asr => "asr_iqamah",
            IqamahName::Maghrib => "maghrib_iqamah",
            IqamahName::Isha => "isha_iqamah",
        }
    }
}

// ── Settings values ──

/// Untyped setting as it appears in a preset table or a config file: `18`, `"90 min"`, `"Hanafi"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSpec {
    Number(f64),
    Text(String),
}

/// Degrees below the horizon, or minutes from the event's anchor time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "RawSpec")]
pub enum AngleSpec {
    Degrees(f64),
    Minutes(f64),
}

impl AngleSpec {
    pub fn value(self) -> f64 {
        match self {
            AngleSpec::Degrees(v) | AngleSpec::Minutes(v) => v,
        }
    }

    pub fn is_minutes(self) -> bool {
        matches!(self, AngleSpec::Minutes(_))
    }
}

impl From<f64> for AngleSpec {
    fn from(degrees: f64) -> Self {
        AngleSpec::Degrees(degrees)
    }
}

impl From<&str> for AngleSpec {
    fn from(s: &str) -> Self {
        if is_min(s) {
            AngleSpec::Minutes(eval_spec(s))
        } else {
            AngleSpec::Degrees(eval_spec(s))
        }
    }
}

impl From<RawSpec> for AngleSpec {
    fn from(raw: RawSpec) -> Self {
        match raw {
            RawSpec::Number(v) => AngleSpec::Degrees(v),
            RawSpec::Text(s) => AngleSpec::from(s.as_str()),
        }
    }
}

impl fmt::Display for AngleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleSpec::Degrees(v) => write!(f, "{v}"),
            AngleSpec::Minutes(v) => write!(f, "{v} min"),
        }
    }
}

/// Shadow-length convention for Asr.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "RawSpec")]
pub enum AsrJuristic {
    #[default]
    Standard,
    Hanafi,
    Factor(f64),
}

impl AsrJuristic {
    pub fn factor(self) -> f64 {
        match self {
            AsrJuristic::Standard => 1.0,
            AsrJuristic::Hanafi => 2.0,
            AsrJuristic::Factor(f) => f,
        }
    }
}

impl From<&str> for AsrJuristic {
    fn from(s: &str) -> Self {
        match s {
            "Standard" => AsrJuristic::Standard,
            "Hanafi" => AsrJuristic::Hanafi,
            other => AsrJuristic::Factor(eval_spec(other)),
        }
    }
}

impl From<RawSpec> for AsrJuristic {
    fn from(raw: RawSpec) -> Self {
        match raw {
            RawSpec::Number(v) => AsrJuristic::Factor(v),
            RawSpec::Text(s) => AsrJuristic::from(s.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MidnightMode {
    /// Halfway from sunset to sunrise.
    #[default]
    Standard,
    /// Halfway from sunset to fajr.
    Jafari,
}

impl From<&str> for MidnightMode {
    fn from(s: &str) -> Self {
        if s == "Jafari" {
            MidnightMode::Jafari
        } else {
            MidnightMode::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HighLatMethod {
    None,
    #[default]
    NightMiddle,
    AngleBased,
    OneSeventh,
}

impl FromStr for HighLatMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(HighLatMethod::None),
            "NightMiddle" => Ok(HighLatMethod::NightMiddle),
            "AngleBased" => Ok(HighLatMethod::AngleBased),
            "OneSeventh" => Ok(HighLatMethod::OneSeventh),
            other => Err(format!("unknown high-latitude method {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
    Float,
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeFormat::H24),
            "12h" => Ok(TimeFormat::H12),
            "Float" | "float" => Ok(TimeFormat::Float),
            other => Err(format!("unknown time format {other:?}")),
        }
    }
}

/// Which side of solar noon an angle event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Before noon (counter-clockwise).
    Ccw,
    /// After noon.
    Cw,
}

// ── Inputs ──

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::new(latitude, longitude)
    }
}

impl From<(f64, f64, f64)> for Location {
    fn from((latitude, longitude, elevation): (f64, f64, f64)) -> Self {
        Location::new(latitude, longitude).with_elevation(elevation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub declination: f64,
    pub equation_of_time: f64,
}

// ── Outputs ──

/// Fractional clock hours for every event. NaN marks an event with no solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl PrayerTimes {
    pub fn get(&self, name: PrayerName) -> f64 {
        match name {
            PrayerName::Imsak => self.imsak,
            PrayerName::Fajr => self.fajr,
            PrayerName::Sunrise => self.sunrise,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Sunset => self.sunset,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
            PrayerName::Midnight => self.midnight,
        }
    }

    pub fn get_mut(&mut self, name: PrayerName) -> &mut f64 {
        match name {
            PrayerName::Imsak => &mut self.imsak,
            PrayerName::Fajr => &mut self.fajr,
            PrayerName::Sunrise => &mut self.sunrise,
            PrayerName::Dhuhr => &mut self.dhuhr,
            PrayerName::Asr => &mut self.asr,
            PrayerName::Sunset => &mut self.sunset,
            PrayerName::Maghrib => &mut self.maghrib,
            PrayerName::Isha => &mut self.isha,
            PrayerName::Midnight => &mut self.midnight,
        }
    }

    pub fn map(mut self, f: impl Fn(PrayerName, f64) -> f64) -> Self {
        for name in PrayerName::ALL {
            let slot = self.get_mut(name);
            *slot = f(name, *slot);
        }
        self
    }
}

/// A rendered time: display text (or the invalid marker), or the raw hour in `Float` mode.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Text(String),
    Float(f64),
}

impl TimeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TimeValue::Text(s) => Some(s),
            TimeValue::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TimeValue::Float(v) => Some(*v),
            TimeValue::Text(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, TimeValue::Text(s) if s == crate::format::INVALID_TIME)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::Text(s) => f.write_str(s),
            TimeValue::Float(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTimes {
    values: [TimeValue; 9],
}

impl FormattedTimes {
    pub fn new(values: [TimeValue; 9]) -> Self {
        Self { values }
    }

    pub fn get(&self, name: PrayerName) -> &TimeValue {
        &self.values[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, &TimeValue)> {
        PrayerName::ALL.into_iter().zip(self.values.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqamahTimes {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl IqamahTimes {
    pub fn get(&self, name: IqamahName) -> &str {
        match name {
            IqamahName::Fajr => &self.fajr,
            IqamahName::Dhuhr => &self.dhuhr,
            IqamahName::Asr => &self.asr,
            IqamahName::Maghrib => &self.maghrib,
            IqamahName::Isha => &self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (IqamahName, &str)> {
        IqamahName::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

/// One day's prayer and congregation times, addressable by the 14 flat keys
/// (`"fajr"`, ..., `"fajr_iqamah"`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTimes {
    /// Times in the requested display format.
    pub prayers: FormattedTimes,
    /// The same times as 24h `HH:MM`, whatever the display format.
    pub anchors: FormattedTimes,
    pub iqamah: IqamahTimes,
}

impl DailyTimes {
    pub fn get(&self, key: &str) -> Option<TimeValue> {
        if let Some(name) = PrayerName::ALL.into_iter().find(|p| p.key() == key) {
            return Some(self.prayers.get(name).clone());
        }
        IqamahName::ALL
            .into_iter()
            .find(|n| n.key() == key)
            .map(|n| TimeValue::Text(self.iqamah.get(n).to_string()))
    }

    pub fn entries(&self) -> Vec<(&'static str, TimeValue)> {
        let prayers = self.prayers.iter().map(|(n, v)| (n.key(), v.clone()));
        let iqamah = self
            .iqamah
            .iter()
            .map(|(n, v)| (n.key(), TimeValue::Text(v.to_string())));
        prayers.chain(iqamah).collect()
    }
}

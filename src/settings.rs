//! Mutable calculation settings and per-event minute offsets.

use serde::Deserialize;

use crate::methods::{registry, Method};
use crate::types::{
    AngleSpec, AsrJuristic, HighLatMethod, MidnightMode, PrayerName, RawSpec, TimeFormat,
};

/// Leading numeric token of a setting string: `"90 min"` -> 90, `"-4.5 min"` -> -4.5.
/// Anything without a parseable leading number evaluates to 0.
pub fn eval_spec(s: &str) -> f64 {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(s.len());
    s[..end].parse().unwrap_or(0.0)
}

pub fn is_min(s: &str) -> bool {
    s.contains("min")
}

impl RawSpec {
    pub fn is_min(&self) -> bool {
        match self {
            RawSpec::Number(_) => false,
            RawSpec::Text(s) => is_min(s),
        }
    }

    pub fn eval(&self) -> f64 {
        match self {
            RawSpec::Number(v) => *v,
            RawSpec::Text(s) => eval_spec(s),
        }
    }
}

/// Partial settings for [`Settings::adjust`]. Unset fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsPatch {
    pub imsak: Option<AngleSpec>,
    pub fajr: Option<AngleSpec>,
    pub dhuhr: Option<AngleSpec>,
    pub asr: Option<AsrJuristic>,
    pub maghrib: Option<AngleSpec>,
    pub isha: Option<AngleSpec>,
    pub midnight: Option<MidnightMode>,
    #[serde(alias = "highLats")]
    pub high_lats: Option<HighLatMethod>,
    #[serde(alias = "format")]
    pub time_format: Option<TimeFormat>,
    pub iterations: Option<u32>,
}

impl SettingsPatch {
    pub fn imsak(mut self, spec: impl Into<AngleSpec>) -> Self {
        self.imsak = Some(spec.into());
        self
    }

    pub fn fajr(mut self, spec: impl Into<AngleSpec>) -> Self {
        self.fajr = Some(spec.into());
        self
    }

    pub fn dhuhr(mut self, spec: impl Into<AngleSpec>) -> Self {
        self.dhuhr = Some(spec.into());
        self
    }

    pub fn asr(mut self, asr: impl Into<AsrJuristic>) -> Self {
        self.asr = Some(asr.into());
        self
    }

    pub fn maghrib(mut self, spec: impl Into<AngleSpec>) -> Self {
        self.maghrib = Some(spec.into());
        self
    }

    pub fn isha(mut self, spec: impl Into<AngleSpec>) -> Self {
        self.isha = Some(spec.into());
        self
    }

    pub fn midnight(mut self, mode: MidnightMode) -> Self {
        self.midnight = Some(mode);
        self
    }

    pub fn high_lats(mut self, method: HighLatMethod) -> Self {
        self.high_lats = Some(method);
        self
    }

    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = Some(format);
        self
    }

    pub fn iterations(mut self, n: u32) -> Self {
        self.iterations = Some(n);
        self
    }
}

/// Minute offsets added to each event after everything else is computed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offsets {
    minutes: [f64; 9],
}

impl Offsets {
    pub fn get(&self, name: PrayerName) -> f64 {
        self.minutes[name.index()]
    }

    pub fn set(&mut self, name: PrayerName, minutes: f64) {
        self.minutes[name.index()] = minutes;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, f64)> + '_ {
        PrayerName::ALL.into_iter().map(move |n| (n, self.get(n)))
    }
}

/// Calculation state owned by one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    method: Method,
    pub imsak: AngleSpec,
    pub fajr: AngleSpec,
    pub dhuhr: AngleSpec,
    pub asr: AsrJuristic,
    pub maghrib: AngleSpec,
    pub isha: AngleSpec,
    pub midnight: MidnightMode,
    pub high_lats: HighLatMethod,
    pub time_format: TimeFormat,
    pub iterations: u32,
    offsets: Offsets,
}

impl Settings {
    /// Base settings with the given method's angles applied on top.
    pub fn new(method: Method) -> Self {
        let params = registry().get(method).params;
        Self {
            method,
            imsak: AngleSpec::Minutes(10.0),
            fajr: params.fajr,
            dhuhr: AngleSpec::Minutes(0.0),
            asr: AsrJuristic::Standard,
            maghrib: params.maghrib,
            isha: params.isha,
            midnight: params.midnight,
            high_lats: HighLatMethod::NightMiddle,
            time_format: TimeFormat::H24,
            iterations: 1,
            offsets: Offsets::default(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Re-applies a preset's angles. Settings the preset does not name are kept.
    pub fn set_method(&mut self, method: Method) {
        self.adjust(&registry().get(method).params.to_patch());
        self.method = method;
    }

    pub fn adjust(&mut self, patch: &SettingsPatch) {
        let p = patch;
        if let Some(v) = p.imsak {
            self.imsak = v;
        }
        if let Some(v) = p.fajr {
            self.fajr = v;
        }
        if let Some(v) = p.dhuhr {
            self.dhuhr = v;
        }
        if let Some(v) = p.asr {
            self.asr = v;
        }
        if let Some(v) = p.maghrib {
            self.maghrib = v;
        }
        if let Some(v) = p.isha {
            self.isha = v;
        }
        if let Some(v) = p.midnight {
            self.midnight = v;
        }
        if let Some(v) = p.high_lats {
            self.high_lats = v;
        }
        if let Some(v) = p.time_format {
            self.time_format = v;
        }
        if let Some(v) = p.iterations {
            self.iterations = v;
        }
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    pub fn tune<I>(&mut self, offsets: I)
    where
        I: IntoIterator<Item = (PrayerName, f64)>,
    {
        for (name, minutes) in offsets {
            self.offsets.set(name, minutes);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(Method::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_takes_leading_number() {
        assert_eq!(eval_spec("0 min"), 0.0);
        assert_eq!(eval_spec("90 min"), 90.0);
        assert_eq!(eval_spec("-4.5 min"), -4.5);
        assert_eq!(eval_spec("18"), 18.0);
        assert_eq!(eval_spec("Jafari"), 0.0);
        assert_eq!(eval_spec(""), 0.0);
        assert_eq!(eval_spec("1.2.3 min"), 0.0);
    }

    #[test]
    fn is_min_only_for_minute_strings() {
        assert!(is_min("0 min"));
        assert!(is_min("10min"));
        assert!(!is_min("18"));
        assert!(!RawSpec::Number(18.0).is_min());
        assert!(RawSpec::Text("90 min".into()).is_min());
    }

    #[test]
    fn patch_from_toml() {
        let patch: SettingsPatch = toml::from_str(
            r#"
            fajr = 18
            isha = "90 min"
            asr = "Hanafi"
            highLats = "AngleBased"
            midnight = "Jafari"
            "#,
        )
        .unwrap();
        assert_eq!(patch.fajr, Some(AngleSpec::Degrees(18.0)));
        assert_eq!(patch.isha, Some(AngleSpec::Minutes(90.0)));
        assert_eq!(patch.asr, Some(AsrJuristic::Hanafi));
        assert_eq!(patch.high_lats, Some(HighLatMethod::AngleBased));
        assert_eq!(patch.midnight, Some(MidnightMode::Jafari));
        assert_eq!(patch.maghrib, None);
    }

    #[test]
    fn set_method_keeps_unrelated_adjustments() {
        let mut s = Settings::new(Method::Isna);
        s.adjust(&SettingsPatch::default().high_lats(HighLatMethod::AngleBased));
        s.set_method(Method::Makkah);
        assert_eq!(s.method(), Method::Makkah);
        assert_eq!(s.isha, AngleSpec::Minutes(90.0));
        assert_eq!(s.high_lats, HighLatMethod::AngleBased);
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use praytimes::{
    AngleSpec, HighLatMethod, Location, Method, PrayTimes, PrayerName, SettingsPatch, TimeFormat,
};

use crate::cli::Cli;

/// Top-level CLI configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Calculation method name; unknown names fall back to MWL.
    #[serde(default = "default_method")]
    pub method: String,

    /// IANA timezone for the location.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_location")]
    pub location: Location,

    /// Overrides applied on top of the method preset.
    #[serde(default = "default_settings")]
    pub settings: SettingsPatch,

    /// Per-event minute offsets, keyed by event name.
    #[serde(default)]
    pub tune: BTreeMap<String, f64>,
}

// Kamloops, BC, with the adjustments the local timetable is published with.
fn default_method() -> String {
    "ISNA".to_string()
}
fn default_timezone() -> String {
    "America/Vancouver".to_string()
}
fn default_location() -> Location {
    Location::new(50.6833, -120.333)
}
fn default_settings() -> SettingsPatch {
    SettingsPatch::default()
        .fajr(18.0)
        .isha(15.0)
        .maghrib(AngleSpec::Minutes(0.0))
        .high_lats(HighLatMethod::AngleBased)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            timezone: default_timezone(),
            location: default_location(),
            settings: default_settings(),
            tune: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// File (or defaults) first, then command-line flags on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(lat) = cli.lat {
            config.location.latitude = lat;
        }
        if let Some(lng) = cli.lng {
            config.location.longitude = lng;
        }
        if let Some(elevation) = cli.elevation {
            config.location.elevation = elevation;
        }
        if let Some(tz) = &cli.timezone {
            config.timezone = tz.clone();
        }
        if let Some(method) = &cli.method {
            config.method = method.clone();
        }
        if let Some(format) = &cli.format {
            let format: TimeFormat = format.parse().map_err(anyhow::Error::msg)?;
            config.settings.time_format = Some(format);
        }
        Ok(config)
    }

    pub fn engine(&self) -> Result<PrayTimes> {
        let offsets = self
            .tune
            .iter()
            .map(|(name, &minutes)| {
                let name: PrayerName = name.parse().map_err(anyhow::Error::msg)?;
                Ok((name, minutes))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut engine = PrayTimes::new(Method::from_name_or_default(&self.method));
        engine.adjust(self.settings.clone());
        engine.tune(offsets);
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            method = "Makkah"
            timezone = "Asia/Riyadh"

            [location]
            latitude = 21.4225
            longitude = 39.8262

            [settings]
            asr = "Hanafi"
            format = "12h"

            [tune]
            fajr = 2
            dhuhr = -1.5
            "#,
        )
        .unwrap();
        assert_eq!(config.location.elevation, 0.0);
        assert_eq!(config.tune.get("dhuhr"), Some(&-1.5));

        let engine = config.engine().unwrap();
        assert_eq!(engine.method(), Method::Makkah);
        assert_eq!(engine.settings().time_format, TimeFormat::H12);
        assert_eq!(engine.offsets().get(PrayerName::Fajr), 2.0);
        assert_eq!(engine.settings().isha, AngleSpec::Minutes(90.0));
    }

    #[test]
    fn defaults_are_kamloops() {
        let engine = AppConfig::default().engine().unwrap();
        assert_eq!(engine.method(), Method::Isna);
        assert_eq!(engine.settings().fajr, AngleSpec::Degrees(18.0));
        assert_eq!(engine.settings().high_lats, HighLatMethod::AngleBased);
    }

    #[test]
    fn rejects_unknown_tune_event() {
        let config: AppConfig = toml::from_str("[tune]\nzuhr = 2").unwrap();
        assert!(config.engine().is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<AppConfig>("colour = \"blue\"").is_err());
    }
}

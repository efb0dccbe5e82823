//! Catalog of calculation methods: organization presets for the twilight angles.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::settings::SettingsPatch;
use crate::types::{AngleSpec, MidnightMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Method {
    #[default]
    #[serde(rename = "MWL")]
    Mwl,
    #[serde(rename = "ISNA")]
    Isna,
    Egypt,
    Makkah,
    Karachi,
    Tehran,
    Jafari,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Mwl,
        Method::Isna,
        Method::Egypt,
        Method::Makkah,
        Method::Karachi,
        Method::Tehran,
        Method::Jafari,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Mwl => "MWL",
            Method::Isna => "ISNA",
            Method::Egypt => "Egypt",
            Method::Makkah => "Makkah",
            Method::Karachi => "Karachi",
            Method::Tehran => "Tehran",
            Method::Jafari => "Jafari",
        }
    }

    /// Looks a method up by its catalog name, falling back to MWL for anything unknown.
    pub fn from_name_or_default(name: &str) -> Method {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(method = name, fallback = Method::default().as_str(), "unknown calculation method");
            Method::default()
        })
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown calculation method {s:?}"))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle parameters of one preset, with the catalog-wide defaults already merged in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParams {
    pub fajr: AngleSpec,
    pub isha: AngleSpec,
    pub maghrib: AngleSpec,
    pub midnight: MidnightMode,
}

impl MethodParams {
    pub fn to_patch(self) -> SettingsPatch {
        SettingsPatch::default()
            .fajr(self.fajr)
            .isha(self.isha)
            .maghrib(self.maghrib)
            .midnight(self.midnight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationMethod {
    pub method: Method,
    pub name: &'static str,
    pub params: MethodParams,
}

struct Preset {
    method: Method,
    name: &'static str,
    fajr: AngleSpec,
    isha: AngleSpec,
    maghrib: Option<AngleSpec>,
    midnight: Option<MidnightMode>,
}

const DEFAULT_MAGHRIB: AngleSpec = AngleSpec::Minutes(0.0);
const DEFAULT_MIDNIGHT: MidnightMode = MidnightMode::Standard;

const PRESETS: [Preset; 7] = [
    Preset {
        method: Method::Mwl,
        name: "Muslim World League",
        fajr: AngleSpec::Degrees(18.0),
        isha: AngleSpec::Degrees(17.0),
        maghrib: None,
        midnight: None,
    },
    Preset {
        method: Method::Isna,
        name: "Islamic Society of North America (ISNA)",
        fajr: AngleSpec::Degrees(15.0),
        isha: AngleSpec::Degrees(15.0),
        maghrib: None,
        midnight: None,
    },
    Preset {
        method: Method::Egypt,
        name: "Egyptian General Authority of Survey",
        fajr: AngleSpec::Degrees(19.5),
        isha: AngleSpec::Degrees(17.5),
        maghrib: None,
        midnight: None,
    },
    // fajr was 19 degrees before 1430 AH
    Preset {
        method: Method::Makkah,
        name: "Umm Al-Qura University, Makkah",
        fajr: AngleSpec::Degrees(18.5),
        isha: AngleSpec::Minutes(90.0),
        maghrib: None,
        midnight: None,
    },
    Preset {
        method: Method::Karachi,
        name: "University of Islamic Sciences, Karachi",
        fajr: AngleSpec::Degrees(18.0),
        isha: AngleSpec::Degrees(18.0),
        maghrib: None,
        midnight: None,
    },
    // isha is not explicitly specified by this method
    Preset {
        method: Method::Tehran,
        name: "Institute of Geophysics, University of Tehran",
        fajr: AngleSpec::Degrees(17.7),
        isha: AngleSpec::Degrees(14.0),
        maghrib: Some(AngleSpec::Degrees(4.5)),
        midnight: Some(MidnightMode::Jafari),
    },
    Preset {
        method: Method::Jafari,
        name: "Shia Ithna-Ashari, Leva Institute, Qum",
        fajr: AngleSpec::Degrees(16.0),
        isha: AngleSpec::Degrees(14.0),
        maghrib: Some(AngleSpec::Degrees(4.0)),
        midnight: Some(MidnightMode::Jafari),
    },
];

/// Immutable method catalog. Built once; every engine copies what it needs out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRegistry {
    methods: Vec<CalculationMethod>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        let methods = PRESETS
            .iter()
            .map(|p| CalculationMethod {
                method: p.method,
                name: p.name,
                params: MethodParams {
                    fajr: p.fajr,
                    isha: p.isha,
                    maghrib: p.maghrib.unwrap_or(DEFAULT_MAGHRIB),
                    midnight: p.midnight.unwrap_or(DEFAULT_MIDNIGHT),
                },
            })
            .collect();
        Self { methods }
    }

    pub fn get(&self, method: Method) -> &CalculationMethod {
        // PRESETS is declared in Method::ALL order
        &self.methods[method as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculationMethod> {
        self.methods.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.method.as_str() == name)
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: LazyLock<MethodRegistry> = LazyLock::new(MethodRegistry::new);

pub fn registry() -> &'static MethodRegistry {
    &REGISTRY
}

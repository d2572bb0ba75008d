use serde::{Deserialize, Serialize};

/// Clock display preference. Serialized as "12h"/"24h" in both the YAML
/// config and the backup document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

/// School level, which fixes the default class length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchoolLevel {
    Middle, // MIDDLE → 45-minute classes
    High,   // HIGH → 50-minute classes
}

impl SchoolLevel {
    pub fn code(&self) -> &'static str {
        match self {
            SchoolLevel::Middle => "MIDDLE",
            SchoolLevel::High => "HIGH",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "MIDDLE" => Some(SchoolLevel::Middle),
            "HIGH" => Some(SchoolLevel::High),
            _ => None,
        }
    }

    /// Default class duration in minutes for the level.
    pub fn class_minutes(&self) -> i64 {
        match self {
            SchoolLevel::Middle => 45,
            SchoolLevel::High => 50,
        }
    }
}

/// Display/authoring preferences carried alongside the schedule.
/// Every field has its own default so documents and configs written by
/// older versions gain the newer fields on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPreferences {
    #[serde(default = "default_time_format")]
    pub time_format: TimeFormat,
    #[serde(default = "default_school_level")]
    pub school_level: SchoolLevel,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

pub(crate) fn default_time_format() -> TimeFormat {
    TimeFormat::H24
}
pub(crate) fn default_school_level() -> SchoolLevel {
    SchoolLevel::High
}
pub(crate) fn default_opacity() -> f64 {
    0.7
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            school_level: default_school_level(),
            opacity: default_opacity(),
        }
    }
}

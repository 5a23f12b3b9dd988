//! Preferences file.
//!
//! A TOML file carrying the same overrides a host page would set on the
//! mount element, plus logging settings:
//!
//! ```toml
//! years = 5
//! gift-levels = [1000, 500, 250]   # or "1000,500,250"
//! log-level = "debug"
//! log-file = "giving.log"
//! ```
//!
//! Overrides are kept as raw strings so they go through exactly the same
//! parsing and fallback as any other host override.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::app::WidgetOverrides;
use crate::logging::LogSettings;

const FALLBACK_NAME: &str = "giving-calculator";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Preferences {
    #[serde(deserialize_with = "deserialize_override")]
    pub years: Option<String>,
    #[serde(deserialize_with = "deserialize_override")]
    pub gift_levels: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Accepts a string, a number, or an array of numbers and keeps it as the
/// raw comma-separated text a host attribute would carry.
fn deserialize_override<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn scalar(value: &toml::Value) -> Option<String> {
        match value {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    let value: Option<toml::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(toml::Value::Array(items)) => items
            .iter()
            .map(scalar)
            .collect::<Option<Vec<_>>>()
            .map(|parts| Some(parts.join(",")))
            .ok_or_else(|| serde::de::Error::custom("expected an array of amounts")),
        Some(other) => scalar(&other)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected a string or a number")),
    }
}

impl Preferences {
    /// Parses preferences from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid preferences")
    }

    /// Loads preferences from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `<app name>.toml` from the working directory if it exists,
    /// otherwise returns empty preferences.
    pub fn load_default() -> Result<Self> {
        let path = default_path();
        if path.is_file() {
            debug!(path = %path.display(), "loading preferences");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Widget overrides, with explicit values taking precedence over the file.
    pub fn overrides(
        &self,
        years: Option<String>,
        gift_levels: Option<String>,
    ) -> WidgetOverrides {
        WidgetOverrides {
            years: years.or_else(|| self.years.clone()),
            gift_levels: gift_levels.or_else(|| self.gift_levels.clone()),
        }
    }

    /// Log settings, with explicit values taking precedence over the file.
    pub fn log_settings(
        &self,
        level: Option<String>,
        file: Option<PathBuf>,
        quiet: bool,
    ) -> LogSettings {
        LogSettings {
            filter: level.or_else(|| self.log_level.clone()),
            quiet,
            file: file.or_else(|| self.log_file.clone()),
        }
    }
}

/// `<executable name>.toml` in the working directory.
pub fn default_path() -> PathBuf {
    let name = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| FALLBACK_NAME.to_string());
    PathBuf::from(format!("{name}.toml"))
}

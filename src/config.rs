//! Optional TOML settings for the CLI.
//!
//! - `Settings::default()` → recurrence seeds (1, 1), search limit 1e6, text output
//! - `Settings::from_toml_file(path)` → load user settings
//! - `Settings::load(cli_path)` → explicit file (must parse) or ~/.seqmath/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::analytics::DEFAULT_SEARCH_LIMIT;
use crate::core::Rational;
use crate::debug_log;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub recurrence: RecurrenceSettings,
    pub search: SearchSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceSettings {
    /// Seeds may be written as integers or as "n/d" strings.
    #[serde(with = "seed")]
    pub first: Rational,
    #[serde(with = "seed")]
    pub second: Rational,
}

impl Default for RecurrenceSettings {
    fn default() -> Self {
        Self { first: Rational::one(), second: Rational::one() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { limit: DEFAULT_SEARCH_LIMIT }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub json: bool,
}

// TOML integers arrive as i64, fractions as strings.
mod seed {
    use num_traits::ToPrimitive;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::core::Rational;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Rational, serializer: S) -> Result<S::Ok, S::Error> {
        match value.numerator().to_i64() {
            Some(n) if value.is_integer() => serializer.serialize_i64(n),
            _ => serializer.collect_str(value),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rational, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(Rational::from(n)),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

impl Settings {
    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        if settings.search.limit == 0 {
            anyhow::bail!("{}: search.limit must be at least 1", path.display());
        }
        Ok(settings)
    }

    /// An explicit `--config` must load; the default location is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            debug_log!("config: loading {}", p.display());
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => {
                debug_log!("config: loading {}", p.display());
                Self::from_toml_file(&p)
            }
            _ => {
                debug_log!("config: using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.seqmath\config.toml on Windows; ~/.seqmath/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".seqmath").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s: Settings = toml::from_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn partial_sections() {
        let s: Settings = toml::from_str(
            r#"
            [recurrence]
            first = 2
            second = "1/2"

            [output]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(s.recurrence.first, Rational::from_integer(2));
        assert_eq!(s.recurrence.second, Rational::new(1, 2).unwrap());
        assert!(s.output.json);
        assert_eq!(s.search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut s = Settings::default();
        s.recurrence.second = Rational::new(3, 4).unwrap();
        s.search.limit = 42;
        let text = toml::to_string(&s).unwrap();
        assert!(text.contains("second = \"3/4\""));
        assert_eq!(toml::from_str::<Settings>(&text).unwrap(), s);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Settings::load(&Some(missing)).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }

    #[test]
    fn zero_limit_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("c.toml");
        fs::write(&p, "[search]\nlimit = 0\n").unwrap();
        assert!(Settings::from_toml_file(&p).is_err());
    }

    #[test]
    fn resolve_prefers_cli() {
        let p = PathBuf::from("x.toml");
        assert_eq!(resolve_config_path(&Some(p.clone())), Some(p));
    }
}

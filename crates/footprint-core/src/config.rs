// crates/footprint-core/src/config.rs

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ADVICE_URL: &str = "http://localhost:8000/advice";
pub const DEFAULT_HISTORY_FILE: &str = "footprint_history.json";
pub const DEFAULT_SETTINGS_FILE: &str = "footprint.toml";

const ADVICE_URL_ENV: &str = "FOOTPRINT_ADVICE_URL";
const HISTORY_PATH_ENV: &str = "FOOTPRINT_HISTORY_PATH";

/// Runtime settings, resolved from an optional TOML file with environment
/// overrides (`FOOTPRINT_ADVICE_URL`, `FOOTPRINT_HISTORY_PATH`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub advice_url: String,
    pub history_path: PathBuf,
    pub advice_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            advice_url: DEFAULT_ADVICE_URL.to_string(),
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            advice_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `footprint.toml` in the working
    /// directory when no path is given and the file exists. Environment
    /// overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match fs::read_to_string(DEFAULT_SETTINGS_FILE) {
                Ok(raw) => toml::from_str(&raw)?,
                Err(err) if err.kind() == ErrorKind::NotFound => Settings::default(),
                Err(err) => return Err(err.into()),
            },
        };

        if let Ok(url) = env::var(ADVICE_URL_ENV) {
            settings.advice_url = url;
        }
        if let Ok(path) = env::var(HISTORY_PATH_ENV) {
            settings.history_path = PathBuf::from(path);
        }
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn advice_timeout(&self) -> Duration {
        Duration::from_secs(self.advice_timeout_secs)
    }
}

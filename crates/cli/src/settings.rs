use std::{fs, io, path::Path};

use log::LevelFilter;

pub const CONFIG_ENV: &str = "LIFTNAME_CONFIG";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub output: OutputFormat,
    pub log_level: LevelFilter,
}

impl Settings {
    /// Reads the settings from a JSON file, falling back to the defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_level: LevelFilter::Warn,
        }
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

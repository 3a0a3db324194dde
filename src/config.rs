//! YAML configuration file, stored in the platform config directory.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_location")]
    pub default_location: String,
    /// Include rows booked on the CR sentinel activity in reports.
    #[serde(default)]
    pub include_cr: bool,
}

fn default_location() -> String {
    "on-site".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_location: default_location(),
            include_cr: false,
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rtimesheet")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Create the config directory and write the config file.
    /// `custom_db` overrides the default database path; a relative path is
    /// resolved against the config directory.
    pub fn init_all(custom_db: Option<String>, skip_write: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let database = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() {
                    p.to_string_lossy().to_string()
                } else {
                    dir.join(p).to_string_lossy().to_string()
                }
            }
            None => Self::database_file().to_string_lossy().to_string(),
        };

        let config = Config {
            database,
            ..Self::default()
        };

        if !skip_write {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for abook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// File name of the address book, relative to the abook home
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_window")]
    pub birthday_window_days: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_window() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window_days: default_window(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(AbookError::Store("config: data_file cannot be empty".into()));
        }
        if self.birthday_window_days < 0 {
            return Err(AbookError::Store(format!(
                "config: birthday_window_days must not be negative, got {}",
                self.birthday_window_days
            )));
        }
        Ok(())
    }
}

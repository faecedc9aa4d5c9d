use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fields every configuration file is expected to carry.
pub const FIELDS: [&str; 3] = ["record_file", "tick_interval_ms", "show_previous_best"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the best-time record
    #[serde(default = "default_record_file")]
    pub record_file: String,
    /// Delay between two timer ticks while a solve is running
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Show the previous best under the current one
    #[serde(default = "default_show_previous")]
    pub show_previous_best: bool,
}

fn default_record_file() -> String {
    Config::record_file_default().to_string_lossy().to_string()
}
fn default_tick_interval() -> u64 {
    10
}
fn default_show_previous() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_file: default_record_file(),
            tick_interval_ms: default_tick_interval(),
            show_previous_best: default_show_previous(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.camelcube`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".camelcube")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("camelcube.conf")
    }

    /// Return the default path of the record file
    pub fn record_file_default() -> PathBuf {
        Self::config_dir().join("data.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Record file with `~` expanded
    pub fn record_path(&self) -> PathBuf {
        expand_tilde(&self.record_file)
    }

    /// Tick interval, never below one millisecond
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Fields of [`FIELDS`] not present in the YAML file at `path`
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let Some(map) = yaml.as_mapping() else {
            return Ok(FIELDS.to_vec());
        };

        Ok(FIELDS
            .iter()
            .copied()
            .filter(|f| !map.contains_key(*f))
            .collect())
    }

    /// Initialize configuration directory and config file.
    /// Returns the record file path the configuration points to.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let record_path = custom_file
            .map(|name| expand_tilde(&name))
            .unwrap_or_else(Self::record_file_default);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                record_file: record_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(record_path)
    }
}

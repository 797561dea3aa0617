use crate::errors::{AppError, AppResult};
use crate::models::View;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = ".hourgrid";
const CONFIG_FILE: &str = "hourgrid.conf";
const DB_FILE: &str = "hourgrid.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub default_view: View,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_view: View::Day,
            export_dir: default_export_dir(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Per-user configuration directory (`~/.hourgrid`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory, the config file and an empty database
    /// file. `custom_db` may be absolute or relative to the config dir. In
    /// test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join(DB_FILE),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));

        Ok(config)
    }
}

use crate::errors::{AppError, AppResult};
use crate::store::DEFAULT_LOG_FILE;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub theme: Theme,
}

/// Look of the clock-in window. Colours are `#RRGGBB`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
    pub button_background: String,
    pub button_foreground: String,
    pub title_size: f32,
    pub label_size: f32,
    pub button_size: f32,
    pub status_size: f32,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
fn default_window_title() -> String {
    "Clock In / Clock Out Module".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            foreground: "#ffffff".to_string(),
            button_background: "#ffffff".to_string(),
            button_foreground: "#000000".to_string(),
            title_size: 24.0,
            label_size: 12.0,
            button_size: 12.0,
            status_size: 10.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            window_title: default_window_title(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rclockinout")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rclockinout")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclockinout.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the configuration directory and write a default config file.
    /// In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Err(AppError::Config(format!(
                "{} already exists, not overwriting",
                path.display()
            )));
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));

        Ok(())
    }
}

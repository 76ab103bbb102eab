mod platform;

pub use platform::{
    PlatformConfig, SpotifyConfig, SupabaseConfig, CLIENT_ID_PLACEHOLDER,
    CLIENT_SECRET_PLACEHOLDER,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_PLAY_GAMES_BASE_URL: &str = "https://www.googleapis.com/games/v1";
pub const DEFAULT_PEOPLE_BASE_URL: &str = "https://people.googleapis.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_play_games_base_url")]
    pub play_games_base_url: String,
    #[serde(default = "default_people_base_url")]
    pub people_base_url: String,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_play_games_base_url() -> String {
    DEFAULT_PLAY_GAMES_BASE_URL.to_string()
}

fn default_people_base_url() -> String {
    DEFAULT_PEOPLE_BASE_URL.to_string()
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_secs: default_request_timeout_secs(),
            play_games_base_url: default_play_games_base_url(),
            people_base_url: default_people_base_url(),
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path`, writing defaults there if the file is missing.
    ///
    /// A file that fails to parse is replaced by defaults, keeping any
    /// `log_level` that could still be read from it.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)?;

        match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config: {}. Using defaults.", e);
                let mut config = Self::default();

                if let Ok(value) = toml::from_str::<toml::Value>(&contents) {
                    if let Some(level) = value.get("log_level").and_then(|v| v.as_str()) {
                        config.log_level = level.to_string();
                    }
                }

                config.validate()?;
                config.save_to(path)?;
                Ok(config)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(Error::Config(format!(
                "Invalid request_timeout_secs: {}. Must be between 1 and 300",
                self.request_timeout_secs
            )));
        }

        for (name, url) in [
            ("play_games_base_url", &self.play_games_base_url),
            ("people_base_url", &self.people_base_url),
        ] {
            let parsed = reqwest::Url::parse(url)
                .map_err(|e| Error::Config(format!("Invalid {}: '{}' ({})", name, url, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "Invalid {}: '{}' must use http or https",
                    name, url
                )));
            }
        }

        Ok(())
    }

    /// `log_level` as a filter; anything unrecognised maps to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "friender")
        .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the bookstore HTTP API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|content| {
                toml::from_str::<Config>(&content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bookstore").join(DEFAULT_FILE_NAME))
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_ref()
            .map(|level| {
                LevelFilter::from_str(level)
                    .map_err(|_| ConfigError::InvalidField("log_level", level.clone()))
            })
            .transpose()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotFound,
    ReadingFile(String),
    InvalidField(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Configuration file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::InvalidField(field, value) => {
                write!(f, "Invalid value '{}' for field '{}'", value, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

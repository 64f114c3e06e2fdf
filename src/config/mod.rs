pub mod types;

pub use types::*;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings
    pub output: OutputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path` (or the default location).
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Settle a [`AppConfig::load`] result, warning and using defaults on failure.
    ///
    /// Call after logging is initialized so the warning is not lost.
    pub fn or_defaults(loaded: Result<Self, AppError>) -> Self {
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bitrate-tier")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(AppError::Config(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

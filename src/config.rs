//! Client Configuration
//!
//! Defaults come from `config/goboard.toml`, embedded at build time.
//! `GOBOARD_API_BASE` and `GOBOARD_LOG` set at build time win over the file.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../config/goboard.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute URL or a path on the page's origin
    pub api_base: String,
    pub log_level: String,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    /// How long the error banner stays up; 0 keeps it until dismissed
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u32,
}

fn default_log_capacity() -> usize {
    500
}

fn default_error_display_ms() -> u32 {
    5000
}

impl AppConfig {
    /// Embedded defaults plus build-time overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml_str(DEFAULT_CONFIG)?;
        config.apply_overrides(option_env!("GOBOARD_API_BASE"), option_env!("GOBOARD_LOG"));
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, api_base: Option<&str>, log_level: Option<&str>) {
        if let Some(base) = api_base.filter(|s| !s.trim().is_empty()) {
            self.api_base = base.trim().to_string();
        }
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_base",
                message: "must not be empty".to_string(),
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse::<LevelFilter>().map_err(|_| ConfigError::Invalid {
            key: "log_level",
            message: format!("unknown level '{}'", self.log_level),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            log_level: "info".to_string(),
            log_capacity: default_log_capacity(),
            error_display_ms: default_error_display_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_keys_fall_back() {
        let config = AppConfig::from_toml_str(
            r#"
            api_base = "https://boards.example.com/api"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_capacity, 500);
        assert_eq!(config.error_display_ms, 5000);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some(" http://localhost:8080/api "), Some("trace"));
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.log_level, "trace");

        config.apply_overrides(Some(""), None);
        assert_eq!(config.api_base, "http://localhost:8080/api");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.log_level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "log_level", .. })
        ));

        let mut config = AppConfig::default();
        config.api_base = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "api_base", .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("api_base = "),
            Err(ConfigError::Parse(_))
        ));
    }
}

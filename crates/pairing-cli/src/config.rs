//! Configuration file management.

use std::path::{Path, PathBuf};

use pairing_core::PairingConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "PAIRING_CONFIG";

/// Config file looked up in the working directory when no override is set.
pub const DEFAULT_CONFIG_FILE: &str = "pairing.toml";

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Pairing engine settings.
    #[serde(default)]
    pub engine: PairingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace" | "debug" | "info" | "warn" | "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the resolved config path.
    ///
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: CliConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the config file path.
    fn config_path() -> PathBuf {
        std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairing_core::LocationMode;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.engine.list_size, 5);
        assert_eq!(config.engine.location_mode, LocationMode::Strict);
        assert_eq!(config.logging.log_level, "warn");
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig::default();
        let toml_str = toml::to_string(&config).expect("serialize");
        let parsed: CliConfig = toml::from_str(&toml_str).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_sections() {
        let config: CliConfig = toml::from_str(
            r#"
            [engine]
            list_size = 3
            location_mode = "preferred"

            [engine.weights]
            stake = 0.4
            features = 0.4
            location = 0.2

            [logging]
            log_level = "debug"
            "#,
        )
        .expect("parse");
        assert_eq!(config.engine.list_size, 3);
        assert_eq!(config.engine.location_mode, LocationMode::Preferred);
        assert!((config.engine.weights.features - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.logging.log_level, "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            CliConfig::load_from(Path::new("/nonexistent/pairing.toml")).expect("defaults");
        assert_eq!(config, CliConfig::default());
    }
}

use crate::error::{Result, TrolleyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_CURRENCY: &str = "$";

/// Configuration for trolley, stored in config.json under the app data dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrolleyConfig {
    /// Base URL of the product catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Currency symbol used when rendering prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for TrolleyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            currency: default_currency(),
        }
    }
}

impl TrolleyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrolleyError::Io)?;
        let config: TrolleyConfig =
            serde_json::from_str(&content).map_err(TrolleyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrolleyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TrolleyError::Serialization)?;
        fs::write(config_path, content).map_err(TrolleyError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "base_url" => Ok(self.base_url.clone()),
            "currency" => Ok(self.currency.clone()),
            _ => Err(TrolleyError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => {
                self.base_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            _ => Err(TrolleyError::Config(format!("Unknown config key: {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_public_api() {
        let config = TrolleyConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn set_base_url_strips_trailing_slash() {
        let mut config = TrolleyConfig::default();
        config.set("base_url", "http://localhost:8080/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = TrolleyConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TrolleyConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, TrolleyConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = TrolleyConfig::default();
        config.set("currency", "€").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = TrolleyConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
    }
}

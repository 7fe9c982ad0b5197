//! Configuration system for geopin.

mod env_parser;
mod loader;
mod overrides;
mod paths;
mod validation;

#[cfg(test)]
mod tests_utils;
#[cfg(test)]
use tests_utils::ENV_MUTEX;

use crate::errors::Error;
use serde::Deserialize;
use std::path::PathBuf;

pub use loader::ConfigFile;

/// Default durable slot holding the saved collection.
pub const DEFAULT_SLOT_NAME: &str = "saved_addresses";
/// Default reverse geocoder endpoint.
pub const DEFAULT_GEOCODER_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

/// Configuration values with priority: defaults < config file < env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database holding durable slots.
    #[serde(default)]
    pub database_path: PathBuf,

    /// Name of the slot holding the saved collection.
    #[serde(default)]
    pub slot_name: String,

    /// Reverse geocoder endpoint.
    #[serde(default)]
    pub geocoder_url: String,

    /// API key sent to the geocoder, if any.
    #[serde(default)]
    pub geocoder_api_key: Option<String>,

    /// Response language requested from the geocoder.
    #[serde(default)]
    pub geocoder_lang: String,

    /// Timeout for a single geocoder request, in seconds.
    #[serde(default)]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        // Use home directory with sensible fallback for systems without HOME
        let home = dirs::home_dir().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        });

        Self {
            database_path: home.join(".geopin").join("geopin.db"),
            slot_name: DEFAULT_SLOT_NAME.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_api_key: None,
            geocoder_lang: "ru_RU".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration with defaults, file values, and environment overrides.
    pub fn load() -> Result<Self, Error> {
        let file_config = loader::load_from_file()?;

        let mut config = Config::default();

        if let Some(mut file) = file_config {
            paths::expand_tilde(&mut file.database_path);
            config.merge_from_file(file);
        }

        overrides::apply_env_overrides(&mut config)?;

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration from a file into this config.
    fn merge_from_file(&mut self, file: ConfigFile) {
        if !file.database_path.as_os_str().is_empty() {
            self.database_path = file.database_path;
        }
        if !file.slot_name.is_empty() {
            self.slot_name = file.slot_name;
        }
        if !file.geocoder_url.is_empty() {
            self.geocoder_url = file.geocoder_url;
        }
        if file.geocoder_api_key.is_some() {
            self.geocoder_api_key = file.geocoder_api_key;
        }
        if !file.geocoder_lang.is_empty() {
            self.geocoder_lang = file.geocoder_lang;
        }
        self.request_timeout_secs = file.request_timeout_secs;
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), Error> {
        let validator = validation::ConfigValidator {
            database_path: self.database_path.clone(),
            slot_name: self.slot_name.clone(),
            geocoder_url: self.geocoder_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
        };

        validator.validate()
    }

    /// Ensure the parent directory of the database exists.
    pub fn ensure_directories(&self) -> Result<(), Error> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Config(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

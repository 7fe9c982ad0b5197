//! Configuration file loading and parsing.

use crate::errors::Error;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub database_path: PathBuf,

    #[serde(default)]
    pub slot_name: String,

    #[serde(default)]
    pub geocoder_url: String,

    #[serde(default)]
    pub geocoder_api_key: Option<String>,

    #[serde(default)]
    pub geocoder_lang: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Location of the config file: `<config dir>/geopin/config.toml`.
pub fn config_file_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let config_dir = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
    config_dir.join("geopin/config.toml")
}

/// Load configuration from TOML file.
pub fn load_from_file() -> Result<Option<ConfigFile>, Error> {
    let config_path = config_file_path();

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {e}",
                config_path.display()
            ))
        })?;

        let config: ConfigFile = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(Some(config))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_toml() {
        let content = r#"
This is not valid TOML
 [[unclosed bracket
 "#;

        let result: Result<ConfigFile, _> = toml::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_file() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.database_path.as_os_str().is_empty());
        assert!(config.slot_name.is_empty());
        assert!(config.geocoder_url.is_empty());
        assert!(config.geocoder_api_key.is_none());
        assert_eq!(config.request_timeout_secs, 10); // Should use default, not u64::default()
    }

    #[test]
    fn test_config_file_partial_toml() {
        let content = r#"
            database_path = "/test/geopin.db"
            slot_name = "trip"
        "#;

        let config: ConfigFile = toml::from_str(content).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/test/geopin.db"));
        assert_eq!(config.slot_name, "trip");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_config_file_path_location() {
        assert!(config_file_path().ends_with("geopin/config.toml"));
    }
}

//! Environment variable overrides for configuration.

use crate::errors::Error;

use super::env_parser;
use super::Config;

#[cfg(test)]
use super::tests_utils::{cleanup_env_vars, set_env, ENV_MUTEX, ENV_VARS};

/// Apply environment variable overrides to configuration.
pub fn apply_env_overrides(config: &mut Config) -> Result<(), Error> {
    env_parser::apply_database_path_override(&mut config.database_path)?;
    env_parser::apply_slot_name_override(&mut config.slot_name)?;
    env_parser::apply_geocoder_url_override(&mut config.geocoder_url)?;
    env_parser::apply_geocoder_api_key_override(&mut config.geocoder_api_key)?;
    env_parser::apply_geocoder_lang_override(&mut config.geocoder_lang)?;
    env_parser::apply_request_timeout_override(&mut config.request_timeout_secs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_env_var_overrides_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars(ENV_VARS);

        set_env("GEOPIN_DATABASE_PATH", "/custom/path/geopin.db");
        set_env("GEOPIN_SLOT_NAME", "trip");
        set_env("GEOPIN_GEOCODER_URL", "http://localhost:8080/1.x/");
        set_env("GEOPIN_GEOCODER_API_KEY", "key-123");
        set_env("GEOPIN_GEOCODER_LANG", "en_US");
        set_env("GEOPIN_REQUEST_TIMEOUT_SECS", "3");

        let mut config = Config::default();
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/custom/path/geopin.db"));
        assert_eq!(config.slot_name, "trip");
        assert_eq!(config.geocoder_url, "http://localhost:8080/1.x/");
        assert_eq!(config.geocoder_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.geocoder_lang, "en_US");
        assert_eq!(config.request_timeout_secs, 3);

        cleanup_env_vars(ENV_VARS);
    }

    #[test]
    fn test_no_env_vars_leaves_config_alone() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars(ENV_VARS);

        let mut config = Config::default();
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.slot_name, "saved_addresses");
        assert!(config.geocoder_api_key.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars(ENV_VARS);

        set_env("GEOPIN_REQUEST_TIMEOUT_SECS", "soon");

        let mut config = Config::default();
        let result = apply_env_overrides(&mut config);
        assert!(matches!(result, Err(Error::Config(_))));

        cleanup_env_vars(ENV_VARS);
    }

    #[test]
    fn test_empty_env_var_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars(ENV_VARS);

        set_env("GEOPIN_DATABASE_PATH", "");

        let mut config = Config::default();
        let result = apply_env_overrides(&mut config);
        assert!(matches!(result, Err(Error::Config(_))));

        cleanup_env_vars(ENV_VARS);
    }

    #[test]
    fn test_whitespace_env_var_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        cleanup_env_vars(ENV_VARS);

        set_env("GEOPIN_SLOT_NAME", "   ");

        let mut config = Config::default();
        let result = apply_env_overrides(&mut config);
        assert!(matches!(result, Err(Error::Config(_))));

        cleanup_env_vars(ENV_VARS);
    }
}

//! Environment variable parsing utilities for configuration.

use crate::errors::Error;
use std::path::PathBuf;

use super::paths;

/// Parse environment variable value or return error if empty/whitespace.
fn parse_env_string(name: &str, value: &str) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    Ok(value.to_string())
}

/// Parse environment variable as a path, expanding tilde.
fn parse_env_path(name: &str, value: &str) -> Result<PathBuf, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    Ok(paths::expand_tilde_path(&PathBuf::from(value)))
}

/// Parse environment variable as an unsigned integer.
fn parse_env_u64(name: &str, value: &str) -> Result<u64, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

/// Apply GEOPIN_DATABASE_PATH environment variable override.
pub fn apply_database_path_override(database_path: &mut PathBuf) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_DATABASE_PATH") {
        *database_path = parse_env_path("GEOPIN_DATABASE_PATH", &val)?;
    }
    Ok(())
}

/// Apply GEOPIN_SLOT_NAME environment variable override.
pub fn apply_slot_name_override(slot_name: &mut String) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_SLOT_NAME") {
        *slot_name = parse_env_string("GEOPIN_SLOT_NAME", &val)?;
    }
    Ok(())
}

/// Apply GEOPIN_GEOCODER_URL environment variable override.
pub fn apply_geocoder_url_override(geocoder_url: &mut String) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_GEOCODER_URL") {
        *geocoder_url = parse_env_string("GEOPIN_GEOCODER_URL", &val)?;
    }
    Ok(())
}

/// Apply GEOPIN_GEOCODER_API_KEY environment variable override.
pub fn apply_geocoder_api_key_override(api_key: &mut Option<String>) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_GEOCODER_API_KEY") {
        *api_key = Some(parse_env_string("GEOPIN_GEOCODER_API_KEY", &val)?);
    }
    Ok(())
}

/// Apply GEOPIN_GEOCODER_LANG environment variable override.
pub fn apply_geocoder_lang_override(lang: &mut String) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_GEOCODER_LANG") {
        *lang = parse_env_string("GEOPIN_GEOCODER_LANG", &val)?;
    }
    Ok(())
}

/// Apply GEOPIN_REQUEST_TIMEOUT_SECS environment variable override.
pub fn apply_request_timeout_override(timeout_secs: &mut u64) -> Result<(), Error> {
    if let Ok(val) = std::env::var("GEOPIN_REQUEST_TIMEOUT_SECS") {
        *timeout_secs = parse_env_u64("GEOPIN_REQUEST_TIMEOUT_SECS", &val)?;
    }
    Ok(())
}

//! Configuration validation logic.

use crate::errors::Error;
use std::path::PathBuf;

/// Validates configuration values.
pub struct ConfigValidator {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Name of the saved collection slot.
    pub slot_name: String,
    /// Reverse geocoder endpoint.
    pub geocoder_url: String,
    /// Geocoder request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ConfigValidator {
    /// Validate all configuration values.
    ///
    /// Checks that:
    /// - Database path is not empty
    /// - Slot name is not empty
    /// - Geocoder URL is an http(s) URL
    /// - Request timeout is at least one second
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any validation check fails.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_database_path()?;
        self.validate_slot_name()?;
        self.validate_geocoder_url()?;
        self.validate_request_timeout()?;

        Ok(())
    }

    fn validate_database_path(&self) -> Result<(), Error> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::Config("Database path cannot be empty".to_string()));
        }

        Ok(())
    }

    fn validate_slot_name(&self) -> Result<(), Error> {
        if self.slot_name.trim().is_empty() {
            return Err(Error::Config("Slot name cannot be empty".to_string()));
        }

        Ok(())
    }

    fn validate_geocoder_url(&self) -> Result<(), Error> {
        let url = self.geocoder_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "Invalid geocoder URL: {:?} (must start with http:// or https://)",
                self.geocoder_url
            )));
        }

        Ok(())
    }

    fn validate_request_timeout(&self) -> Result<(), Error> {
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

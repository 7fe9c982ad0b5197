//! Shared test utilities for config module tests.

use std::sync::Mutex;

/// Mutex to serialize environment variable tests and prevent race conditions.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Every environment variable read by geopin config.
pub const ENV_VARS: &[&str] = &[
    "GEOPIN_DATABASE_PATH",
    "GEOPIN_SLOT_NAME",
    "GEOPIN_GEOCODER_URL",
    "GEOPIN_GEOCODER_API_KEY",
    "GEOPIN_GEOCODER_LANG",
    "GEOPIN_REQUEST_TIMEOUT_SECS",
];

/// Set an environment variable. Callers must hold [`ENV_MUTEX`].
pub fn set_env(name: &str, value: &str) {
    // SAFETY: env tests are serialized through ENV_MUTEX.
    unsafe { std::env::set_var(name, value) }
}

/// Clean up environment variables used by geopin config.
pub fn cleanup_env_vars(vars: &[&str]) {
    for var in vars {
        // SAFETY: env tests are serialized through ENV_MUTEX.
        unsafe { std::env::remove_var(var) }
    }
}

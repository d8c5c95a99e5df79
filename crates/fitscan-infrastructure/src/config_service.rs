//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml` in the platform
//! config directory (a missing file falls back to defaults), applies
//! environment overrides, and caches the result to avoid repeated file I/O.

use crate::paths::FitscanPaths;
use fitscan_core::FitscanError;
use fitscan_core::config::AppConfig;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables that override the file configuration.
const ENV_API_URL: &str = "FITSCAN_API_URL";
const ENV_ONESIGNAL_APP_ID: &str = "FITSCAN_ONESIGNAL_APP_ID";
const ENV_APP_VERSION: &str = "FITSCAN_APP_VERSION";
const ENV_APP_ENV: &str = "FITSCAN_APP_ENV";

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it on first access.
    ///
    /// Load failures are logged and replaced by defaults; configuration is
    /// never a reason to fail startup.
    pub fn get_config(&self) -> AppConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = Self::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {e}");
            apply_env_overrides(AppConfig::default())
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads the configuration from the default config file and applies
    /// environment overrides.
    fn load_config() -> fitscan_core::Result<AppConfig> {
        let path = FitscanPaths::config_file()
            .map_err(|e| FitscanError::config(e.to_string()))?;
        let config = Self::load_from_file(&path)?;
        Ok(apply_env_overrides(config))
    }

    /// Reads and parses a config file; a missing file yields defaults.
    fn load_from_file(path: &Path) -> fitscan_core::Result<AppConfig> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `FITSCAN_*` environment overrides on top of the file
/// configuration. Empty values are treated as unset.
fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(value) = std::env::var(ENV_API_URL) {
        if !value.is_empty() {
            config.api_url = value;
        }
    }
    if let Ok(value) = std::env::var(ENV_ONESIGNAL_APP_ID) {
        config.onesignal_app_id = (!value.is_empty()).then_some(value);
    }
    if let Ok(value) = std::env::var(ENV_APP_VERSION) {
        if !value.is_empty() {
            config.app_version = value;
        }
    }
    if let Ok(value) = std::env::var(ENV_APP_ENV) {
        if !value.is_empty() {
            config.app_env = value;
        }
    }
    config
}

//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Fallback analysis backend URL used in development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration.
///
/// Covers the analysis backend URL, the OneSignal application id (absent
/// disables the engagement collaborator entirely), and app version and
/// environment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the remote analysis backend.
    pub api_url: String,
    /// OneSignal application id. `None` disables engagement.
    pub onesignal_app_id: Option<String>,
    pub app_version: String,
    /// "development" or "production".
    pub app_env: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            onesignal_app_id: None,
            app_version: "1.0.0".to_string(),
            app_env: "development".to_string(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.onesignal_app_id.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str(r#"api_url = "https://api.fitscan.app""#).unwrap();
        assert_eq!(config.api_url, "https://api.fitscan.app");
        assert_eq!(config.app_version, "1.0.0");
        assert_eq!(config.app_env, "development");
    }

    #[test]
    fn test_is_production() {
        let config: AppConfig = toml::from_str(r#"app_env = "production""#).unwrap();
        assert!(config.is_production());
    }
}

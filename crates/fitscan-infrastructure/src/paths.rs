//! Unified path management for FitScan client files.
//!
//! Configuration and durable session storage live under the platform config
//! and data directories so behavior is consistent across Linux, macOS and
//! Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for fitscan.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/fitscan/           # Config directory
/// ├── config.toml              # Application configuration
/// └── logs/                    # Application logs
///
/// ~/.local/share/fitscan/      # Data directory
/// └── storage/                 # Durable session key-value storage
///     ├── profile.json
///     ├── auth_state.json
///     └── ...
/// ```
pub struct FitscanPaths;

impl FitscanPaths {
    const APP_DIR: &'static str = "fitscan";

    /// Returns the fitscan configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/fitscan/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the fitscan data directory.
    ///
    /// This is where the durable session storage lives.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/fitscan/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable session storage directory.
    pub fn storage_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = FitscanPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("fitscan"));
    }

    #[test]
    fn test_config_file() {
        let config_file = FitscanPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        // Verify it's under config_dir
        let config_dir = FitscanPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_storage_dir() {
        let storage_dir = FitscanPaths::storage_dir().unwrap();
        assert!(storage_dir.ends_with("storage"));
        // Verify it's under data_dir
        let data_dir = FitscanPaths::data_dir().unwrap();
        assert!(storage_dir.starts_with(&data_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = FitscanPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        let config_dir = FitscanPaths::config_dir().unwrap();
        assert!(logs_dir.starts_with(&config_dir));
    }
}

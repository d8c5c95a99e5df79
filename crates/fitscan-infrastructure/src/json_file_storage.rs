//! JSON file-backed key-value storage.
//!
//! Stores each key as `<key>.json` under a base directory:
//!
//! ```text
//! base_dir/
//! ├── profile.json
//! ├── auth_state.json
//! └── meal_history.json
//! ```
//!
//! Every write replaces the whole document, so concurrent writers to the
//! same key settle on last-write-wins.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fitscan_core::storage::KeyValueStorage;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-per-key storage implementing the session store's durable layer.
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `base_dir`.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).context("Failed to create storage directory")?;
        Ok(Self { base_dir })
    }

    /// Creates a storage at the default platform location
    /// (data dir + `fitscan/storage`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn default_location() -> Result<Self> {
        let base_dir = crate::paths::FitscanPaths::storage_dir()
            .context("Failed to resolve storage directory")?;
        Self::new(base_dir)
    }

    /// Returns the file path for a given key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read storage key {key:?}")),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value)
            .await
            .context(format!("Failed to write storage key {key:?}"))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove storage key {key:?}")),
        }
    }

    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<(String, Option<String>)>> {
        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            let value = self.get(key).await?;
            entries.push(((*key).to_string(), value));
        }
        Ok(entries)
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            if let Err(e) = self.remove(key).await {
                // Best-effort bulk delete: skip the key and keep going
                tracing::warn!("Failed to remove storage key {key:?}: {e}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        storage.set("profile", r#"{"age":"28"}"#).await.unwrap();

        let value = storage.get("profile").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"age":"28"}"#));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        assert_eq!(storage.get("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        storage.set("auth_state", "1").await.unwrap();
        storage.set("auth_state", "2").await.unwrap();

        assert_eq!(storage.get("auth_state").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        storage.set("profile", "{}").await.unwrap();
        storage.remove("profile").await.unwrap();

        assert_eq!(storage.get("profile").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        assert!(storage.remove("never-written").await.is_ok());
    }

    #[tokio::test]
    async fn test_multi_get_pairs_keys_with_values() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        storage.set("profile", "{}").await.unwrap();
        storage.set("auth_state", "{}").await.unwrap();

        let entries = storage
            .multi_get(&["profile", "analysis_result", "auth_state"])
            .await
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("profile".to_string(), Some("{}".to_string())));
        assert_eq!(entries[1], ("analysis_result".to_string(), None));
        assert_eq!(entries[2], ("auth_state".to_string(), Some("{}".to_string())));
    }

    #[tokio::test]
    async fn test_multi_remove_clears_all_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path()).unwrap();

        storage.set("profile", "{}").await.unwrap();
        storage.set("meal_history", "[]").await.unwrap();

        storage
            .multi_remove(&["profile", "meal_history", "never-written"])
            .await
            .unwrap();

        assert_eq!(storage.get("profile").await.unwrap(), None);
        assert_eq!(storage.get("meal_history").await.unwrap(), None);
    }
}

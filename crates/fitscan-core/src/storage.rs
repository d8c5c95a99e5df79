//! Durable key-value storage contract.
//!
//! The session store persists every entity under a fixed string key as a
//! complete JSON document. This trait decouples the store from the storage
//! mechanism (files on desktop, device storage on mobile, an in-memory map
//! in tests).

use anyhow::Result;
use async_trait::async_trait;

/// Storage keys, one per session-store entity.
pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const AUTH_STATE: &str = "auth_state";
    pub const ANALYSIS_RESULT: &str = "analysis_result";
    pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";
    pub const MEAL_HISTORY: &str = "meal_history";
    pub const WORKOUT_HISTORY: &str = "workout_history";

    /// Every session key, in hydration order.
    pub const ALL: [&str; 6] = [
        PROFILE,
        AUTH_STATE,
        ANALYSIS_RESULT,
        ONBOARDING_COMPLETE,
        MEAL_HISTORY,
        WORKOUT_HISTORY,
    ];
}

/// An abstract key-value store for JSON-encoded session state.
///
/// Values are always complete documents; partial or delta writes are never
/// issued, so concurrent writers to the same key settle on last-write-wins.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads a single key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Key present
    /// - `Ok(None)`: Key absent
    /// - `Err(_)`: Error occurred during the read
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the full value for a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Reads several keys in one call, pairing each requested key with its
    /// value if present.
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<(String, Option<String>)>>;

    /// Removes several keys, continuing past individual failures.
    async fn multi_remove(&self, keys: &[&str]) -> Result<()>;
}

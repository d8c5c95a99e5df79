//! Engagement service implementations.
//!
//! `OneSignalEngagement` delivers segmentation tags and external-id linkage
//! to the OneSignal REST API; `DisabledEngagement` is the no-op used when no
//! application id is configured. Both honor the collaborator contract:
//! failures are logged and swallowed, never reported to the session store.

use async_trait::async_trait;
use fitscan_core::config::AppConfig;
use fitscan_core::engagement::EngagementService;
use reqwest::Client;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

const ONESIGNAL_API_URL: &str = "https://api.onesignal.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OneSignal-backed engagement service.
///
/// Holds the external id of the currently linked user; tag updates issued
/// while no user is linked are dropped (OneSignal has nobody to attach them
/// to yet).
pub struct OneSignalEngagement {
    client: Client,
    api_url: String,
    app_id: String,
    /// External id of the currently linked user, if any.
    external_id: RwLock<Option<String>>,
}

impl OneSignalEngagement {
    /// Creates a service talking to the production OneSignal API.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self::with_api_url(ONESIGNAL_API_URL, app_id)
    }

    /// Creates a service with a custom API base URL.
    pub fn with_api_url(api_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            app_id: app_id.into(),
            external_id: RwLock::new(None),
        }
    }

    /// Creates or refreshes the OneSignal user aliased to `external_id`.
    async fn push_user(&self, external_id: &str) {
        let url = format!("{}/apps/{}/users", self.api_url, self.app_id);
        let body = json!({ "identity": { "external_id": external_id } });

        let result = self
            .client
            .post(&url)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    "OneSignal user linkage failed (status: {})",
                    response.status()
                );
            }
            Ok(_) => tracing::debug!("OneSignal user linked: {external_id}"),
            Err(e) => tracing::warn!("OneSignal user linkage failed: {e}"),
        }
    }

    /// Patches segmentation tags onto the user aliased to `external_id`.
    async fn push_tags(&self, external_id: &str, tags: &HashMap<String, String>) {
        let url = format!(
            "{}/apps/{}/users/by/external_id/{}",
            self.api_url, self.app_id, external_id
        );
        let body = json!({ "properties": { "tags": tags } });

        let result = self
            .client
            .patch(&url)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    "OneSignal tag update failed (status: {})",
                    response.status()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("OneSignal tag update failed: {e}"),
        }
    }
}

#[async_trait]
impl EngagementService for OneSignalEngagement {
    async fn initialize(&self) {
        tracing::info!("OneSignal engagement initialized (app: {})", self.app_id);
    }

    async fn set_tags(&self, tags: HashMap<String, String>) {
        let external_id = self.external_id.read().unwrap().clone();
        let Some(external_id) = external_id else {
            tracing::debug!("No linked user; dropping {} engagement tag(s)", tags.len());
            return;
        };
        self.push_tags(&external_id, &tags).await;
    }

    async fn set_external_user_id(&self, user_id: &str) {
        *self.external_id.write().unwrap() = Some(user_id.to_string());
        self.push_user(user_id).await;
    }

    async fn remove_external_user_id(&self) {
        let previous = self.external_id.write().unwrap().take();
        if let Some(previous) = previous {
            tracing::debug!("OneSignal user unlinked: {previous}");
        }
    }
}

/// No-op engagement used when no OneSignal app id is configured.
pub struct DisabledEngagement;

#[async_trait]
impl EngagementService for DisabledEngagement {
    async fn initialize(&self) {
        tracing::info!("OneSignal app id not configured - engagement disabled");
    }

    async fn set_tags(&self, _tags: HashMap<String, String>) {}

    async fn set_external_user_id(&self, _user_id: &str) {}

    async fn remove_external_user_id(&self) {}
}

/// Builds the engagement service matching the configuration.
pub fn engagement_from_config(config: &AppConfig) -> Arc<dyn EngagementService> {
    match &config.onesignal_app_id {
        Some(app_id) if !app_id.is_empty() => Arc::new(OneSignalEngagement::new(app_id.clone())),
        _ => Arc::new(DisabledEngagement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tags_without_linked_user_are_dropped() {
        // Never reaches the network: set_tags returns before building a request
        let service = OneSignalEngagement::with_api_url("http://127.0.0.1:0", "test-app");
        service
            .set_tags(HashMap::from([("used_coach".to_string(), "true".to_string())]))
            .await;
        assert!(service.external_id.read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_external_user_id_clears_linkage() {
        let service = OneSignalEngagement::with_api_url("http://127.0.0.1:0", "test-app");
        *service.external_id.write().unwrap() = Some("a@b.com".to_string());

        service.remove_external_user_id().await;

        assert!(service.external_id.read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disabled_engagement_swallows_everything() {
        let service = DisabledEngagement;
        service.initialize().await;
        service
            .set_tags(HashMap::from([("a".to_string(), "b".to_string())]))
            .await;
        service.set_external_user_id("a@b.com").await;
        service.remove_external_user_id().await;
    }
}

//! External engagement/notification collaborator contract.
//!
//! The push-notification service is consulted for user segmentation tags and
//! external-id linkage on login, logout, onboarding completion and history
//! appends. Every operation is best-effort: implementations log failures and
//! return normally, and the session store never depends on their success —
//! which is why none of these methods return a `Result`.

use async_trait::async_trait;
use std::collections::HashMap;

/// Engagement event names used for notification segmentation.
pub mod events {
    pub const COMPLETED_ONBOARDING: &str = "completed_onboarding";
    pub const BODY_SCAN: &str = "body_scan";
    pub const MEAL_SCAN: &str = "meal_scan";
    pub const WORKOUT_GENERATED: &str = "workout_generated";
    pub const APP_OPENED: &str = "app_opened";
    pub const USED_NUTRISCAN: &str = "used_nutriscan";
    pub const USED_COACH: &str = "used_coach";
}

/// The external engagement/identity collaborator.
#[async_trait]
pub trait EngagementService: Send + Sync {
    /// Initializes the underlying service. Called once at startup.
    async fn initialize(&self);

    /// Registers segmentation tags for the current user.
    async fn set_tags(&self, tags: HashMap<String, String>);

    /// Links the current user to an external identifier (login).
    async fn set_external_user_id(&self, user_id: &str);

    /// Unlinks the external identifier (logout).
    async fn remove_external_user_id(&self);

    /// Records an engagement event: a `last_<event>` tag holding the current
    /// timestamp, plus any extra metadata tags.
    async fn track_engagement(&self, event: &str, metadata: HashMap<String, String>) {
        let mut tags = metadata;
        tags.insert(format!("last_{event}"), chrono::Utc::now().to_rfc3339());
        self.set_tags(tags).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every tag write so the default `track_engagement` can be
    /// checked.
    struct RecordingEngagement {
        tags: Mutex<Vec<HashMap<String, String>>>,
    }

    #[async_trait]
    impl EngagementService for RecordingEngagement {
        async fn initialize(&self) {}

        async fn set_tags(&self, tags: HashMap<String, String>) {
            self.tags.lock().unwrap().push(tags);
        }

        async fn set_external_user_id(&self, _user_id: &str) {}

        async fn remove_external_user_id(&self) {}
    }

    #[tokio::test]
    async fn test_track_engagement_stamps_last_event_tag() {
        let service = RecordingEngagement {
            tags: Mutex::new(Vec::new()),
        };
        let metadata = HashMap::from([("source".to_string(), "test".to_string())]);
        service
            .track_engagement(events::MEAL_SCAN, metadata)
            .await;

        let recorded = service.tags.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].contains_key("last_meal_scan"));
        assert_eq!(recorded[0].get("source").map(String::as_str), Some("test"));
    }
}

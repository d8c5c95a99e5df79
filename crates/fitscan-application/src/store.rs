//! The session store: single source of truth for user/auth/history state.
//!
//! The store mediates between in-memory UI state and durable key-value
//! storage. Every setter updates memory synchronously so the UI reflects the
//! change immediately, then persists the full value write-behind: one spawned
//! task per mutation, failures logged and never surfaced or rolled back. At
//! process start [`SessionStore::hydrate`] populates the fields from storage
//! before any route-dependent logic may run; accessors fail loudly while
//! hydration is in progress.
//!
//! Completion order of spawned writes relative to later mutations is not
//! guaranteed. Each write carries the complete value for its key, so rapid
//! successive writes settle on last-write-wins in the durable layer.

use fitscan_core::analysis::AnalysisResult;
use fitscan_core::auth::AuthState;
use fitscan_core::engagement::{EngagementService, events};
use fitscan_core::history::{CappedHistory, MealHistoryEntry, WorkoutHistoryEntry};
use fitscan_core::profile::Profile;
use fitscan_core::route::{InitialRoute, initial_route};
use fitscan_core::storage::{KeyValueStorage, keys};
use fitscan_core::{FitscanError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tokio::task::JoinHandle;

/// In-memory + persisted container for the session entities.
///
/// # Thread Safety
///
/// Each field is only ever mutated from the UI event-handling thread, but
/// reads may come from anywhere, so fields sit behind `RwLock`s. The durable
/// layer is a write-behind cache: callers get no read-after-write guarantee
/// on it.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    engagement: Arc<dyn EngagementService>,
    /// True from construction until hydration completes.
    is_loading: AtomicBool,
    profile: RwLock<Profile>,
    auth: RwLock<AuthState>,
    analysis_result: RwLock<Option<AnalysisResult>>,
    has_completed_onboarding: RwLock<bool>,
    meal_history: RwLock<CappedHistory<MealHistoryEntry>>,
    workout_history: RwLock<CappedHistory<WorkoutHistoryEntry>>,
    /// Outstanding write-behind tasks, drained by [`SessionStore::flush`].
    pending_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates a store in the loading phase with every entity at its
    /// default. Call [`SessionStore::hydrate`] before exposing the store.
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        engagement: Arc<dyn EngagementService>,
    ) -> Self {
        Self {
            storage,
            engagement,
            is_loading: AtomicBool::new(true),
            profile: RwLock::new(Profile::default()),
            auth: RwLock::new(AuthState::anonymous()),
            analysis_result: RwLock::new(None),
            has_completed_onboarding: RwLock::new(false),
            meal_history: RwLock::new(CappedHistory::new()),
            workout_history: RwLock::new(CappedHistory::new()),
            pending_tasks: Mutex::new(Vec::new()),
        }
    }

    /// Whether hydration is still in progress.
    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    /// Populates the in-memory fields from durable storage.
    ///
    /// Each key is decoded independently: a read or decode failure leaves
    /// that field at its default and is logged, never propagated. The
    /// loading phase ends exactly once, on success or partial failure.
    pub async fn hydrate(&self) {
        match self.storage.multi_get(&keys::ALL).await {
            Ok(entries) => {
                for (key, value) in entries {
                    let Some(raw) = value else { continue };
                    match key.as_str() {
                        keys::PROFILE => Self::restore(&key, &raw, &self.profile),
                        keys::AUTH_STATE => Self::restore(&key, &raw, &self.auth),
                        keys::ANALYSIS_RESULT => Self::restore(&key, &raw, &self.analysis_result),
                        keys::ONBOARDING_COMPLETE => {
                            Self::restore(&key, &raw, &self.has_completed_onboarding);
                        }
                        keys::MEAL_HISTORY => Self::restore(&key, &raw, &self.meal_history),
                        keys::WORKOUT_HISTORY => Self::restore(&key, &raw, &self.workout_history),
                        _ => tracing::warn!("Ignoring unknown storage key {key:?}"),
                    }
                }
            }
            Err(e) => tracing::warn!("Session hydration read failed: {e}"),
        }

        self.is_loading.store(false, Ordering::Release);
        tracing::debug!("Session store hydrated");
    }

    /// Decodes one hydrated value into its field; failures keep the default.
    fn restore<T: DeserializeOwned>(key: &str, raw: &str, slot: &RwLock<T>) {
        match serde_json::from_str::<T>(raw) {
            Ok(value) => *slot.write().unwrap() = value,
            Err(e) => tracing::warn!("Discarding undecodable value for key {key:?}: {e}"),
        }
    }

    // ============================================================================
    // Accessors — fail loudly before hydration
    // ============================================================================

    fn ready(&self) -> Result<()> {
        if self.is_loading() {
            Err(FitscanError::StoreNotReady)
        } else {
            Ok(())
        }
    }

    pub fn profile(&self) -> Result<Profile> {
        self.ready()?;
        Ok(self.profile.read().unwrap().clone())
    }

    pub fn auth(&self) -> Result<AuthState> {
        self.ready()?;
        Ok(self.auth.read().unwrap().clone())
    }

    pub fn analysis_result(&self) -> Result<Option<AnalysisResult>> {
        self.ready()?;
        Ok(self.analysis_result.read().unwrap().clone())
    }

    pub fn has_completed_onboarding(&self) -> Result<bool> {
        self.ready()?;
        Ok(*self.has_completed_onboarding.read().unwrap())
    }

    /// Meal history, newest first.
    pub fn meal_history(&self) -> Result<Vec<MealHistoryEntry>> {
        self.ready()?;
        Ok(self.meal_history.read().unwrap().to_vec())
    }

    /// Workout history, newest first.
    pub fn workout_history(&self) -> Result<Vec<WorkoutHistoryEntry>> {
        self.ready()?;
        Ok(self.workout_history.read().unwrap().to_vec())
    }

    /// Route the UI must start on, per the auth/onboarding table.
    pub fn initial_route(&self) -> Result<InitialRoute> {
        self.ready()?;
        let auth = self.auth.read().unwrap().clone();
        let completed = *self.has_completed_onboarding.read().unwrap();
        Ok(initial_route(&auth, completed))
    }

    // ============================================================================
    // Setters — synchronous in-memory update, write-behind persistence
    // ============================================================================

    /// Replaces the profile wholesale (onboarding submission).
    pub fn set_profile(&self, profile: Profile) {
        let mut slot = self.profile.write().unwrap();
        *slot = profile;
        self.persist(keys::PROFILE, &*slot);
    }

    /// Stores a fresh body-analysis result, overwriting any previous one.
    pub fn set_analysis_result(&self, result: AnalysisResult) {
        let mut slot = self.analysis_result.write().unwrap();
        *slot = Some(result);
        self.persist(keys::ANALYSIS_RESULT, &*slot);
    }

    /// Sets the onboarding completion flag.
    ///
    /// Completing onboarding additionally fires the segmentation tag and
    /// engagement event side channel; that is best-effort and not part of
    /// the store's correctness contract.
    pub fn set_onboarding_complete(&self, complete: bool) {
        {
            let mut slot = self.has_completed_onboarding.write().unwrap();
            *slot = complete;
            self.persist(keys::ONBOARDING_COMPLETE, &*slot);
        }

        if complete {
            let engagement = Arc::clone(&self.engagement);
            self.fire_and_forget(async move {
                engagement
                    .set_tags(HashMap::from([(
                        events::COMPLETED_ONBOARDING.to_string(),
                        "true".to_string(),
                    )]))
                    .await;
                engagement
                    .track_engagement(events::COMPLETED_ONBOARDING, HashMap::new())
                    .await;
            });
        }
    }

    /// Guest login: authenticated without an account. Touches nothing but
    /// the auth state.
    pub fn login_as_guest(&self) {
        let mut slot = self.auth.write().unwrap();
        *slot = AuthState::guest();
        self.persist(keys::AUTH_STATE, &*slot);
    }

    /// Email login. No format validation happens here; that is a UI concern.
    /// Links the external identity on the engagement collaborator.
    pub fn login(&self, email: impl Into<String>) {
        let email = email.into();
        {
            let mut slot = self.auth.write().unwrap();
            *slot = AuthState::authenticated(email.clone());
            self.persist(keys::AUTH_STATE, &*slot);
        }

        let engagement = Arc::clone(&self.engagement);
        self.fire_and_forget(async move {
            engagement.set_external_user_id(&email).await;
        });
    }

    /// Resets every entity to its default, bulk-deletes all durable keys and
    /// unlinks the external identity.
    ///
    /// The only operation touching every entity at once. Not transactional:
    /// a partial bulk-delete failure is logged while the in-memory reset
    /// stands.
    pub fn logout(&self) {
        *self.auth.write().unwrap() = AuthState::anonymous();
        *self.has_completed_onboarding.write().unwrap() = false;
        *self.analysis_result.write().unwrap() = None;
        *self.profile.write().unwrap() = Profile::default();
        self.meal_history.write().unwrap().clear();
        self.workout_history.write().unwrap().clear();

        let storage = Arc::clone(&self.storage);
        self.fire_and_forget(async move {
            if let Err(e) = storage.multi_remove(&keys::ALL).await {
                tracing::warn!("Failed to clear durable session keys on logout: {e}");
            }
        });

        let engagement = Arc::clone(&self.engagement);
        self.fire_and_forget(async move {
            engagement.remove_external_user_id().await;
        });
    }

    /// Prepends a meal to the history, dropping the entry past the cap.
    pub fn record_meal(&self, entry: MealHistoryEntry) {
        {
            let mut history = self.meal_history.write().unwrap();
            history.push_front(entry);
            self.persist(keys::MEAL_HISTORY, &*history);
        }

        let engagement = Arc::clone(&self.engagement);
        self.fire_and_forget(async move {
            engagement
                .set_tags(HashMap::from([(
                    events::USED_NUTRISCAN.to_string(),
                    "true".to_string(),
                )]))
                .await;
            engagement
                .track_engagement(events::MEAL_SCAN, HashMap::new())
                .await;
        });
    }

    /// Prepends a workout to the history, dropping the entry past the cap.
    pub fn record_workout(&self, entry: WorkoutHistoryEntry) {
        {
            let mut history = self.workout_history.write().unwrap();
            history.push_front(entry);
            self.persist(keys::WORKOUT_HISTORY, &*history);
        }

        let engagement = Arc::clone(&self.engagement);
        self.fire_and_forget(async move {
            engagement
                .set_tags(HashMap::from([(
                    events::USED_COACH.to_string(),
                    "true".to_string(),
                )]))
                .await;
            engagement
                .track_engagement(events::WORKOUT_GENERATED, HashMap::new())
                .await;
        });
    }

    // ============================================================================
    // Write-behind plumbing
    // ============================================================================

    /// Serializes `value` now (so the write carries the state at mutation
    /// time) and spawns its persistence task.
    fn persist<T: Serialize>(&self, key: &'static str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to encode {key:?} for persistence: {e}");
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        self.fire_and_forget(async move {
            if let Err(e) = storage.set(key, &raw).await {
                tracing::warn!("Write-behind persistence of {key:?} failed: {e}");
            }
        });
    }

    /// Spawns a best-effort task and tracks it for [`SessionStore::flush`].
    fn fire_and_forget(&self, task: impl Future<Output = ()> + Send + 'static) {
        let handle = tokio::spawn(task);
        let mut pending = self.pending_tasks.lock().unwrap();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Awaits all outstanding write-behind tasks.
    ///
    /// Used at shutdown (and by tests) so queued writes reach the durable
    /// layer before the process ends. Callers gain no read-after-write
    /// guarantee from this; the write contract is unchanged.
    pub async fn flush(&self) {
        loop {
            let pending: Vec<JoinHandle<()>> = {
                let mut guard = self.pending_tasks.lock().unwrap();
                guard.drain(..).collect()
            };
            if pending.is_empty() {
                break;
            }
            for handle in pending {
                if let Err(e) = handle.await {
                    tracing::warn!("Write-behind task panicked: {e}");
                }
            }
        }
    }
}

//! Composition root: builds the service graph and provisions the store.

use anyhow::{Context, Result};
use fitscan_api::AnalysisApi;
use fitscan_application::{SessionStore, StoreHandle};
use fitscan_core::config::AppConfig;
use fitscan_infrastructure::{ConfigService, JsonFileStorage, engagement_from_config};
use std::sync::Arc;

/// Services shared by every command.
pub struct AppContext {
    pub config: AppConfig,
    pub api: AnalysisApi,
    handle: StoreHandle,
}

impl AppContext {
    /// The provisioned session store.
    pub fn store(&self) -> fitscan_core::Result<Arc<SessionStore>> {
        self.handle.get()
    }
}

/// Builds the concrete service instances, hydrates the session store and
/// installs it in the handle. Nothing route-dependent runs before this
/// returns.
pub async fn bootstrap() -> Result<AppContext> {
    let config_service = ConfigService::new();
    let config = config_service.get_config();

    let storage =
        Arc::new(JsonFileStorage::default_location().context("Failed to open session storage")?);
    let engagement = engagement_from_config(&config);
    engagement.initialize().await;

    let store = Arc::new(SessionStore::new(storage, engagement));
    store.hydrate().await;

    let handle = StoreHandle::new();
    handle.provide(store)?;

    let api = AnalysisApi::new(config.api_url.clone());

    tracing::debug!("FitScan client bootstrapped (env: {})", config.app_env);

    Ok(AppContext {
        config,
        api,
        handle,
    })
}

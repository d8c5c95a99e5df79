//! Infrastructure layer for FitScan.
//!
//! Concrete implementations of the core contracts: platform path management,
//! JSON file-backed key-value storage, configuration loading, and the
//! OneSignal engagement collaborator.

pub mod config_service;
pub mod engagement;
pub mod json_file_storage;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::engagement::{DisabledEngagement, OneSignalEngagement, engagement_from_config};
pub use crate::json_file_storage::JsonFileStorage;

//! HTTP client for the remote FitScan analysis backend.
//!
//! The backend is an opaque service with three multipart endpoints (body
//! analysis, meal analysis, workout generation) plus health/info probes.
//! Responses are the JSON shapes in `fitscan_core::analysis`.

pub mod client;
pub mod error;

pub use crate::client::{AnalysisApi, ApiInfo, HealthStatus};
pub use crate::error::ApiError;

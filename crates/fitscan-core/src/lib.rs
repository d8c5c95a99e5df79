//! Domain models and contracts for the FitScan client.
//!
//! This crate holds the entities owned by the session store (profile, auth
//! state, analysis results, bounded histories), the traits the store depends
//! on (durable key-value storage, the engagement collaborator), and the
//! shared error type. Concrete implementations live in
//! `fitscan-infrastructure`; the store itself lives in `fitscan-application`.

pub mod analysis;
pub mod auth;
pub mod config;
pub mod engagement;
pub mod error;
pub mod history;
pub mod profile;
pub mod route;
pub mod storage;

// Re-export common error type
pub use error::{FitscanError, Result};

//! Error types for the FitScan client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the FitScan client core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FitscanError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (storage layer)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The session store was queried before hydration completed
    #[error("Session store accessed before hydration completed")]
    StoreNotReady,

    /// The session store was queried before the composition root provided it
    #[error("Session store accessed before it was provisioned")]
    StoreNotProvisioned,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FitscanError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this error marks invalid use of the session store, i.e. a
    /// query made before hydration or provisioning. These are programming
    /// errors on the caller's side, not runtime storage failures.
    pub fn is_invalid_use(&self) -> bool {
        matches!(self, Self::StoreNotReady | Self::StoreNotProvisioned)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FitscanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FitscanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FitscanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for FitscanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FitscanError>`.
pub type Result<T> = std::result::Result<T, FitscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_use_classification() {
        assert!(FitscanError::StoreNotReady.is_invalid_use());
        assert!(FitscanError::StoreNotProvisioned.is_invalid_use());
        assert!(!FitscanError::storage("disk full").is_invalid_use());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<i32>("not json").unwrap_err();
        let converted: FitscanError = err.into();
        assert!(converted.is_serialization());
    }
}

//! Error type for the analysis backend client.

use thiserror::Error;

/// Errors produced by [`crate::AnalysisApi`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    InvalidInput(String),

    /// The image file could not be read.
    #[error("Failed to read image {path}: {message}")]
    Image { path: String, message: String },

    /// The request could not be sent or the response never arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `detail` carries the
    /// backend's human-readable message when the error body had one.
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

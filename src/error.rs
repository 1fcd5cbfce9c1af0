//! Error types for the data source adapter

use thiserror::Error;

/// Result alias used throughout the adapter layer
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures that can occur while talking to the video data source
#[derive(Error, Debug)]
pub enum ApiError {
    /// The source returned a structured error envelope. The message is
    /// displayed verbatim so it can be passed through to `last_error`
    /// unchanged.
    #[error("{0}")]
    Source(String),

    /// A detail lookup matched zero items
    #[error("video not found: {0}")]
    NotFound(String),

    /// The source answered with a non-success status and no error envelope
    #[error("API request failed with status {0}")]
    Status(u16),

    /// Network-level failure reaching the data source
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The success envelope could not be decoded
    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller-supplied parameter failed validation before any request
    /// was issued
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// True when the failure means "the item does not exist" rather than
    /// "the exchange went wrong"
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

//! Public error types for the `visual_campaigns` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `VisualCampaignsApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisualCampaignsError {
    /// The request carried no origin to authorize against.
    #[error("Origin is required")]
    MissingOrigin,

    /// No active campaign exists for the key.
    #[error("Visual campaign not found: {key}")]
    NotFound { key: String },

    /// Active campaigns exist for the key, but none allow the requesting origin.
    #[error("Origin is not authorized for visual campaign: {key}")]
    Unauthorized { key: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl VisualCampaignsError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an `Unauthorized` error.
    #[must_use]
    pub fn unauthorized(key: impl Into<String>) -> Self {
        Self::Unauthorized { key: key.into() }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}

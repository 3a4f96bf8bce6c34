use thiserror::Error;
use visual_campaigns_sdk::VisualCampaignsError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Origin header is missing")]
    MissingOrigin,

    #[error("No active visual campaign for key '{key}'")]
    NotFound { key: String },

    #[error("Origin host {} is not authorized for key '{key}'", .host.as_deref().unwrap_or("<none>"))]
    Unauthorized { key: String, host: Option<String> },

    #[error("Campaign storage error: {0}")]
    StorageFault(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    #[must_use]
    pub fn unauthorized(key: impl Into<String>, host: Option<&str>) -> Self {
        Self::Unauthorized {
            key: key.into(),
            host: host.map(ToOwned::to_owned),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for VisualCampaignsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingOrigin => Self::MissingOrigin,
            DomainError::NotFound { key } => Self::not_found(key),
            DomainError::Unauthorized { key, .. } => Self::unauthorized(key),
            DomainError::StorageFault(_) => Self::internal(),
        }
    }
}

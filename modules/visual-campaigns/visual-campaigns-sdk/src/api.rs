//! `VisualCampaignsApi` trait definition.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::VisualCampaignsError;
use crate::models::Campaign;

/// Public API trait for the `visual_campaigns` module.
///
/// `origin` is the raw value of the requester's `Origin` header. Both methods
/// reject an absent or blank origin with [`VisualCampaignsError::MissingOrigin`]
/// before any lookup happens.
#[async_trait]
pub trait VisualCampaignsApi: Send + Sync {
    /// Resolve several keys at once.
    ///
    /// Keys without an active campaign authorized for the origin are left out
    /// of the returned map; that is not an error.
    ///
    /// # Errors
    /// `MissingOrigin` for an absent origin, `Internal` when storage fails.
    async fn resolve_many(
        &self,
        origin: Option<&str>,
        keys: &[String],
    ) -> Result<BTreeMap<String, Campaign>, VisualCampaignsError>;

    /// Resolve a single key, picking at random among authorized candidates.
    ///
    /// # Errors
    /// `MissingOrigin`, `NotFound` when no campaign is active for `key`,
    /// `Unauthorized` when none allows the origin, `Internal` on storage failure.
    async fn resolve_one(
        &self,
        origin: Option<&str>,
        key: &str,
    ) -> Result<Campaign, VisualCampaignsError>;
}

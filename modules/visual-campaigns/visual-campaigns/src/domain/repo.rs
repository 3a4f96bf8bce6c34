use std::collections::BTreeSet;

use async_trait::async_trait;
use visual_campaigns_sdk::Campaign;

/// Read-only lookup of currently active campaigns.
///
/// What "active" means is decided by the implementation; callers only ever
/// see campaigns that passed it. Both lookups return an empty list rather
/// than an error when nothing matches.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Active campaigns whose output key is one of `keys`, in no particular order.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    async fn find_active_by_keys(&self, keys: &BTreeSet<String>) -> anyhow::Result<Vec<Campaign>>;

    /// Active campaigns with exactly this output key.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    async fn find_active_by_key(&self, key: &str) -> anyhow::Result<Vec<Campaign>>;
}

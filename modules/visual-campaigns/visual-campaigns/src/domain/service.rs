use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, instrument};
use visual_campaigns_sdk::Campaign;

use super::authorization::{DomainPolicy, HostComparison};
use super::error::DomainError;
use super::origin::RequestOrigin;
use super::random::{RandomSource, ThreadRandom};
use super::repo::CampaignStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverConfig {
    pub host_comparison: HostComparison,
}

/// Decides which active campaigns a requesting origin may receive.
///
/// Holds no mutable state; share one instance across requests behind an `Arc`.
pub struct AccessResolver {
    store: Arc<dyn CampaignStore>,
    policy: DomainPolicy,
    random: Arc<dyn RandomSource>,
}

impl AccessResolver {
    #[must_use]
    pub fn new(store: Arc<dyn CampaignStore>, config: ResolverConfig) -> Self {
        Self {
            store,
            policy: DomainPolicy::new(config.host_comparison),
            random: Arc::new(ThreadRandom),
        }
    }

    /// Replace the random source used for tie-breaks in [`Self::resolve_one`].
    #[must_use]
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Resolve every requested key the origin is authorized for.
    ///
    /// Blank and duplicate keys are ignored. Keys with no authorized active
    /// campaign are simply absent from the result. When several authorized
    /// campaigns share a key, the last one returned by the store wins.
    ///
    /// # Errors
    /// - [`DomainError::MissingOrigin`] for an absent or blank origin
    /// - [`DomainError::StorageFault`] when the store cannot be read
    #[instrument(skip(self, keys), fields(keys = keys.len()))]
    pub async fn resolve_multiple(
        &self,
        origin_header: Option<&str>,
        keys: &[String],
    ) -> Result<BTreeMap<String, Campaign>, DomainError> {
        let origin = RequestOrigin::from_header(origin_header)?;

        let wanted: BTreeSet<String> = keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        if wanted.is_empty() {
            return Ok(BTreeMap::new());
        }

        let host = origin.host_for(self.policy.comparison());
        let candidates = self.store.find_active_by_keys(&wanted).await?;
        let total = candidates.len();

        let resolved: BTreeMap<String, Campaign> = candidates
            .into_iter()
            .filter(|c| self.policy.is_authorized(c, host))
            .map(|c| (c.output_key.clone(), c))
            .collect();

        debug!(
            origin_host = host.unwrap_or_default(),
            candidates = total,
            resolved = resolved.len(),
            "Resolved visual campaigns"
        );
        Ok(resolved)
    }

    /// Resolve a single key.
    ///
    /// Among several authorized active campaigns one is chosen uniformly at
    /// random, so repeated requests may see different campaigns.
    ///
    /// # Errors
    /// - [`DomainError::MissingOrigin`] for an absent or blank origin
    /// - [`DomainError::NotFound`] when no active campaign has the key
    /// - [`DomainError::Unauthorized`] when none of them allows the origin host
    /// - [`DomainError::StorageFault`] when the store cannot be read
    #[instrument(skip(self))]
    pub async fn resolve_one(
        &self,
        origin_header: Option<&str>,
        key: &str,
    ) -> Result<Campaign, DomainError> {
        let origin = RequestOrigin::from_header(origin_header)?;

        let candidates = self.store.find_active_by_key(key).await?;
        if candidates.is_empty() {
            debug!("No active campaign for key");
            return Err(DomainError::not_found(key));
        }

        let host = origin.host_for(self.policy.comparison());
        let total = candidates.len();
        let mut authorized: Vec<Campaign> = candidates
            .into_iter()
            .filter(|c| self.policy.is_authorized(c, host))
            .collect();

        if authorized.is_empty() {
            debug!(
                origin_host = host.unwrap_or_default(),
                candidates = total,
                "Origin not authorized for any active campaign"
            );
            return Err(DomainError::unauthorized(key, host));
        }

        let idx = self.random.pick_index(authorized.len());
        let picked = authorized.swap_remove(idx);
        debug!(
            campaign_id = picked.id,
            candidates = total,
            eligible = authorized.len() + 1,
            "Selected visual campaign"
        );
        Ok(picked)
    }
}

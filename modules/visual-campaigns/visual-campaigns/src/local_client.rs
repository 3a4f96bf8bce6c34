use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use visual_campaigns_sdk::{Campaign, VisualCampaignsApi, VisualCampaignsError};

use crate::domain::service::AccessResolver;

/// In-process client backed directly by the resolver.
pub struct LocalClient {
    resolver: Arc<AccessResolver>,
}

impl LocalClient {
    #[must_use]
    pub fn new(resolver: Arc<AccessResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl VisualCampaignsApi for LocalClient {
    async fn resolve_many(
        &self,
        origin: Option<&str>,
        keys: &[String],
    ) -> Result<BTreeMap<String, Campaign>, VisualCampaignsError> {
        self.resolver
            .resolve_multiple(origin, keys)
            .await
            .map_err(Into::into)
    }

    async fn resolve_one(
        &self,
        origin: Option<&str>,
        key: &str,
    ) -> Result<Campaign, VisualCampaignsError> {
        self.resolver
            .resolve_one(origin, key)
            .await
            .map_err(Into::into)
    }
}

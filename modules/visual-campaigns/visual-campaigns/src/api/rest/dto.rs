use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use visual_campaigns_sdk::Campaign;

/// Campaign as rendered to embedding sites.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CampaignDto {
    pub key: String,
    pub title: String,
    pub markup: String,
    /// Comma-separated allow-list, as stored. Empty means unrestricted.
    pub domains: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub starts_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub ends_at: OffsetDateTime,
    pub cookie_key: Option<String>,
    pub cookie_ttl_hours: Option<i32>,
}

impl From<Campaign> for CampaignDto {
    fn from(campaign: Campaign) -> Self {
        Self {
            domains: campaign.domains_joined(),
            key: campaign.output_key,
            title: campaign.title,
            markup: campaign.markup,
            starts_at: campaign.starts_at,
            ends_at: campaign.ends_at,
            cookie_key: campaign.cookie_key,
            cookie_ttl_hours: campaign.cookie_ttl_hours,
        }
    }
}

/// Multi-key lookup response; keys without an eligible campaign are absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct CampaignsResponse {
    pub visual_campaigns: BTreeMap<String, CampaignDto>,
}

impl From<BTreeMap<String, Campaign>> for CampaignsResponse {
    fn from(map: BTreeMap<String, Campaign>) -> Self {
        Self {
            visual_campaigns: map.into_iter().map(|(k, c)| (k, c.into())).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CampaignResponse {
    pub visual_campaign: CampaignDto,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            visual_campaign: campaign.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCampaignsQuery {
    /// Comma-separated output keys, e.g. `pushdown,homepage`.
    #[serde(default)]
    pub keys: Option<String>,
    /// Response format; only `json` is supported.
    #[serde(default)]
    pub format: Option<String>,
}

impl ListCampaignsQuery {
    /// Split `keys` on commas, trimming and dropping blanks.
    #[must_use]
    pub fn key_list(&self) -> Vec<String> {
        self.keys
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormatQuery {
    /// Response format; only `json` is supported.
    #[serde(default)]
    pub format: Option<String>,
}

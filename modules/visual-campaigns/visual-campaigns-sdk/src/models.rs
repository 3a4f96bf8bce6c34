//! Public models for the `visual_campaigns` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `visual_campaigns` module and its consumers.

use time::OffsetDateTime;

/// A published markup fragment served to embedding sites under an output key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: i64,
    pub title: String,
    /// Caller-facing key. Several active campaigns may share one.
    pub output_key: String,
    /// Opaque HTML fragment, returned verbatim.
    pub markup: String,
    /// Hosts allowed to embed this campaign. Empty means unrestricted.
    pub domains: Vec<String>,
    pub cookie_key: Option<String>,
    pub cookie_ttl_hours: Option<i32>,
    pub starts_at: OffsetDateTime,
    pub ends_at: OffsetDateTime,
}

impl Campaign {
    /// Whether any origin may embed this campaign.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domain list in its stored, comma-joined form.
    #[must_use]
    pub fn domains_joined(&self) -> String {
        self.domains.join(",")
    }
}

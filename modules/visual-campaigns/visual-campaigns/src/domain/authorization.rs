//! Domain restriction check for embedding origins.

use visual_campaigns_sdk::Campaign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostComparison {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

/// Decides whether a campaign may be served to an origin host.
///
/// A campaign with an empty domain list is unrestricted. Otherwise the host
/// must equal one of the listed domains exactly: no wildcards, and a listed
/// `scpr.org` does not cover `www.scpr.org`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainPolicy {
    comparison: HostComparison,
}

impl DomainPolicy {
    #[must_use]
    pub fn new(comparison: HostComparison) -> Self {
        Self { comparison }
    }

    #[must_use]
    pub fn comparison(&self) -> HostComparison {
        self.comparison
    }

    /// `origin_host` must be in the form [`Self::comparison`] expects: the
    /// normalized host when case-insensitive, the verbatim one otherwise.
    #[must_use]
    pub fn is_authorized(&self, campaign: &Campaign, origin_host: Option<&str>) -> bool {
        if campaign.is_unrestricted() {
            return true;
        }
        let Some(host) = origin_host else {
            return false;
        };
        campaign
            .domains
            .iter()
            .any(|domain| self.hosts_match(domain, host))
    }

    fn hosts_match(&self, domain: &str, host: &str) -> bool {
        match self.comparison {
            HostComparison::CaseInsensitive => domain.eq_ignore_ascii_case(host),
            HostComparison::CaseSensitive => domain == host,
        }
    }
}

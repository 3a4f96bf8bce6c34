use serde::{Deserialize, Serialize};

use crate::domain::authorization::HostComparison;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualCampaignsConfig {
    /// Compare the origin host, as written in the header, against campaign
    /// domains byte-for-byte. Off by default: hostnames are case-insensitive.
    pub case_sensitive_hosts: bool,
}

impl VisualCampaignsConfig {
    #[must_use]
    pub fn host_comparison(&self) -> HostComparison {
        if self.case_sensitive_hosts {
            HostComparison::CaseSensitive
        } else {
            HostComparison::CaseInsensitive
        }
    }
}

//! Origin header handling.
//!
//! Only the host part of the `Origin` header takes part in authorization;
//! scheme and port are ignored.

use url::Url;

use super::authorization::HostComparison;
use super::error::DomainError;

/// A present, non-blank `Origin` header and the host parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    raw: String,
    /// Normalized by `Url`: lowercased.
    host: Option<String>,
    /// Host text exactly as written in the header.
    raw_host: Option<String>,
}

impl RequestOrigin {
    /// Validate the raw header value.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingOrigin`] when the header is absent or blank.
    pub fn from_header(header: Option<&str>) -> Result<Self, DomainError> {
        let raw = header
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(DomainError::MissingOrigin)?;

        // `null` (sandboxed frames) and scheme-less values carry no host.
        let host = Url::parse(raw)
            .ok()
            .and_then(|url| url.host_str().map(ToOwned::to_owned));
        let raw_host = host
            .as_deref()
            .map(|normalized| verbatim_host(raw, normalized).to_owned());

        Ok(Self {
            raw: raw.to_owned(),
            host,
            raw_host,
        })
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Host component, if the header parsed as a URL with one.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Host as the client wrote it, with its original letter case.
    #[must_use]
    pub fn raw_host(&self) -> Option<&str> {
        self.raw_host.as_deref()
    }

    /// The host form to match against campaign domains under `comparison`.
    #[must_use]
    pub fn host_for(&self, comparison: HostComparison) -> Option<&str> {
        match comparison {
            HostComparison::CaseInsensitive => self.host(),
            HostComparison::CaseSensitive => self.raw_host(),
        }
    }
}

/// Slice the host out of the header's authority, keeping its case.
///
/// Falls back to `normalized` when the written form differs from it by more
/// than ASCII case (IDNA, percent-escapes, numeric IPv4 forms).
fn verbatim_host<'a>(raw: &'a str, normalized: &'a str) -> &'a str {
    let Some((_, rest)) = raw.split_once("://") else {
        return normalized;
    };
    let authority = rest
        .split(['/', '?', '#', '\\'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    let host = if host_port.starts_with('[') {
        host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port
            .rsplit_once(':')
            .map_or(host_port, |(host, _)| host)
    };

    if host.eq_ignore_ascii_case(normalized) {
        host
    } else {
        normalized
    }
}

//! Layered server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the YAML file given
//! with `--config`, `APP__*` environment variables (`__` separates nesting
//! levels, e.g. `APP__SERVER__BIND_ADDR`), then CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use url::Url;
use visual_campaigns::VisualCampaignsConfig;

pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub visual_campaigns: VisualCampaignsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dsn: String,
    pub max_conns: u32,
    /// Apply pending migrations on `run`.
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://visual_campaigns.db?mode=rwc".to_owned(),
            max_conns: 10,
            auto_migrate: true,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.dsn.contains(":memory:")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `APP__*` env vars.
    ///
    /// # Errors
    /// Fails when `path` is given but is not a file, or when a source does
    /// not parse into the expected shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed("APP__").split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply `--port` and `--mock`.
    ///
    /// # Errors
    /// Fails when a port override is given and `server.bind_addr` is invalid.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, mock: bool) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        if mock {
            MOCK_DSN.clone_into(&mut self.database.dsn);
            self.database.max_conns = 1;
            self.database.auto_migrate = true;
        }
        Ok(())
    }

    /// # Errors
    /// Fails when `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))
    }

    /// Pretty JSON with the database password masked.
    ///
    /// # Errors
    /// Fails if serialization fails.
    pub fn to_redacted_json(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.database.dsn = redact_dsn_password(&self.database.dsn);
        serde_json::to_string_pretty(&shown).context("failed to serialize configuration")
    }
}

/// Mask the password component of a DSN, leaving everything else intact.
#[must_use]
pub fn redact_dsn_password(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_owned();
    }
    match Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() && parsed.set_password(Some("***REDACTED***")).is_err() {
                return "***REDACTED***".to_owned();
            }
            parsed.to_string()
        }
        Err(_) => "***REDACTED***".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.database.max_conns, 10);
        assert!(cfg.database.auto_migrate);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(!cfg.visual_campaigns.case_sensitive_hosts);
    }

    #[test]
    fn yaml_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
server:
  bind_addr: "0.0.0.0:9000"
logging:
  format: json
visual_campaigns:
  case_sensitive_hosts: true
"#,
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(cfg.visual_campaigns.case_sensitive_hosts);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.database.max_conns, 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/config.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn unknown_module_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "visual_campaigns:\n  wildcard_hosts: true\n");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn port_and_mock_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(Some(9191), true).unwrap();
        assert_eq!(cfg.bind_addr().unwrap().port(), 9191);
        assert_eq!(cfg.database.dsn, MOCK_DSN);
        assert_eq!(cfg.database.max_conns, 1);
        assert!(cfg.database.is_in_memory());
    }

    #[test]
    fn port_override_needs_valid_bind_addr() {
        let mut cfg = AppConfig::default();
        cfg.server.bind_addr = "not-an-address".to_owned();
        assert!(cfg.apply_cli_overrides(Some(1), false).is_err());
        assert!(cfg.apply_cli_overrides(None, false).is_ok());
    }

    #[test]
    fn redacts_dsn_password() {
        assert_eq!(
            redact_dsn_password("postgres://app:s3cret@db:5432/campaigns"),
            "postgres://app:***REDACTED***@db:5432/campaigns"
        );
        assert_eq!(
            redact_dsn_password("sqlite://visual_campaigns.db?mode=rwc"),
            "sqlite://visual_campaigns.db?mode=rwc"
        );
    }

    #[test]
    fn redacted_json_hides_password() {
        let mut cfg = AppConfig::default();
        cfg.database.dsn = "postgres://app:s3cret@db/campaigns".to_owned();
        let json = cfg.to_redacted_json().unwrap();
        assert!(!json.contains("s3cret"));
        assert!(json.contains("***REDACTED***"));
    }
}

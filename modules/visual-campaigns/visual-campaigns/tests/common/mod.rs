#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared fixtures: in-memory SQLite with migrations applied, plus a small
//! builder for seeding campaign rows.

use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, NotSet, Set};
use time::{Duration, OffsetDateTime};
use visual_campaigns::infra::storage::entity::{ActiveModel, CampaignStatus, Model};

pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // One connection, otherwise each pooled connection sees its own empty DB.
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory SQLite");
    visual_campaigns::module::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

pub struct CampaignSeed {
    title: String,
    output_key: String,
    markup: String,
    domains: String,
    cookie_key: Option<String>,
    cookie_ttl_hours: Option<i32>,
    status: CampaignStatus,
    starts_at: OffsetDateTime,
    ends_at: OffsetDateTime,
}

impl CampaignSeed {
    /// Published, with a window around now.
    pub fn active(output_key: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            title: format!("{output_key} campaign"),
            output_key: output_key.to_owned(),
            markup: format!("<div>{output_key}</div>"),
            domains: String::new(),
            cookie_key: None,
            cookie_ttl_hours: None,
            status: CampaignStatus::Published,
            starts_at: now - Duration::days(1),
            ends_at: now + Duration::days(1),
        }
    }

    /// Draft row inside its window.
    pub fn inactive(output_key: &str) -> Self {
        Self {
            status: CampaignStatus::Draft,
            ..Self::active(output_key)
        }
    }

    /// Published, but the window closed yesterday.
    pub fn expired(output_key: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            starts_at: now - Duration::days(7),
            ends_at: now - Duration::days(1),
            ..Self::active(output_key)
        }
    }

    /// Published, but the window opens tomorrow.
    pub fn scheduled(output_key: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            starts_at: now + Duration::days(1),
            ends_at: now + Duration::days(7),
            ..Self::active(output_key)
        }
    }

    pub fn window(mut self, starts_at: OffsetDateTime, ends_at: OffsetDateTime) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    pub fn domains(mut self, domains: &str) -> Self {
        domains.clone_into(&mut self.domains);
        self
    }

    pub fn markup(mut self, markup: &str) -> Self {
        markup.clone_into(&mut self.markup);
        self
    }

    pub fn cookie(mut self, key: &str, ttl_hours: i32) -> Self {
        self.cookie_key = Some(key.to_owned());
        self.cookie_ttl_hours = Some(ttl_hours);
        self
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Model {
        let now = OffsetDateTime::now_utc();
        ActiveModel {
            id: NotSet,
            title: Set(self.title),
            output_key: Set(self.output_key),
            markup: Set(self.markup),
            domains: Set(self.domains),
            cookie_key: Set(self.cookie_key),
            cookie_ttl_hours: Set(self.cookie_ttl_hours),
            status: Set(self.status),
            starts_at: Set(self.starts_at),
            ends_at: Set(self.ends_at),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert campaign")
    }
}

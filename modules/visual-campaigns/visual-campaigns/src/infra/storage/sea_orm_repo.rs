use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use time::OffsetDateTime;
use visual_campaigns_sdk::Campaign;

use crate::domain::repo::CampaignStore;

use super::entity::{CampaignStatus, Column, Entity as CampaignEntity};

/// `CampaignStore` over the `visual_campaigns` table.
///
/// Key and status are filtered in SQL; the `[starts_at, ends_at]` window is
/// checked against the current UTC time after loading. SQLite keeps the
/// timestamps as RFC 3339 TEXT, and comparing those strings is only correct
/// when every row shares one UTC offset.
#[derive(Clone)]
pub struct SeaOrmCampaignStore {
    db: DatabaseConnection,
}

impl SeaOrmCampaignStore {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_active(&self, query: Select<CampaignEntity>) -> anyhow::Result<Vec<Campaign>> {
        let rows = query
            .filter(Column::Status.eq(CampaignStatus::Published))
            .all(&self.db)
            .await?;

        // Window check stays in Rust: TEXT timestamps do not order by instant.
        let now = OffsetDateTime::now_utc();
        Ok(rows
            .into_iter()
            .filter(|row| row.is_active_at(now))
            .map(Into::into)
            .collect())
    }
}

#[async_trait]
impl CampaignStore for SeaOrmCampaignStore {
    async fn find_active_by_keys(&self, keys: &BTreeSet<String>) -> anyhow::Result<Vec<Campaign>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let query = CampaignEntity::find().filter(Column::OutputKey.is_in(keys.iter().cloned()));
        self.load_active(query).await
    }

    async fn find_active_by_key(&self, key: &str) -> anyhow::Result<Vec<Campaign>> {
        let query = CampaignEntity::find().filter(Column::OutputKey.eq(key));
        self.load_active(query).await
    }
}

use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Publication state of a campaign row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CampaignStatus {
    #[sea_orm(num_value = 0)]
    Draft,
    #[sea_orm(num_value = 1)]
    Published,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visual_campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub output_key: String,
    pub markup: String,
    /// Comma-separated host allow-list; empty string means unrestricted.
    pub domains: String,
    pub cookie_key: Option<String>,
    pub cookie_ttl_hours: Option<i32>,
    pub status: CampaignStatus,
    pub starts_at: OffsetDateTime,
    pub ends_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Published and inside its `[starts_at, ends_at]` window at `now`.
    #[must_use]
    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        self.status == CampaignStatus::Published && self.starts_at <= now && now <= self.ends_at
    }
}

//! Module wiring: store, resolver, client and REST routes.

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use visual_campaigns_sdk::VisualCampaignsApi;

use crate::api::rest::routes;
use crate::config::VisualCampaignsConfig;
use crate::domain::random::{RandomSource, ThreadRandom};
use crate::domain::repo::CampaignStore;
use crate::domain::service::{AccessResolver, ResolverConfig};
use crate::infra::storage::SeaOrmCampaignStore;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::LocalClient;

pub struct VisualCampaignsModule {
    resolver: Arc<AccessResolver>,
}

impl VisualCampaignsModule {
    /// Build the module over a database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &VisualCampaignsConfig) -> Self {
        Self::with_store(Arc::new(SeaOrmCampaignStore::new(db)), config)
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn CampaignStore>, config: &VisualCampaignsConfig) -> Self {
        Self::with_store_and_random(store, config, Arc::new(ThreadRandom))
    }

    /// Like [`Self::with_store`], with a caller-provided random source.
    #[must_use]
    pub fn with_store_and_random(
        store: Arc<dyn CampaignStore>,
        config: &VisualCampaignsConfig,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let resolver = AccessResolver::new(
            store,
            ResolverConfig {
                host_comparison: config.host_comparison(),
            },
        )
        .with_random_source(random);
        tracing::info!(
            case_sensitive_hosts = config.case_sensitive_hosts,
            "visual_campaigns module initialized"
        );
        Self {
            resolver: Arc::new(resolver),
        }
    }

    #[must_use]
    pub fn resolver(&self) -> Arc<AccessResolver> {
        Arc::clone(&self.resolver)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn VisualCampaignsApi> {
        Arc::new(LocalClient::new(self.resolver()))
    }

    /// Mount the REST endpoints onto `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, self.resolver())
    }
}

/// Apply pending schema migrations.
///
/// # Errors
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    Migrator::up(db, None).await?;
    tracing::info!("visual_campaigns migrations applied");
    Ok(())
}

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;

use super::handlers;
use super::openapi::ApiDoc;
use crate::domain::service::AccessResolver;

pub const API_PREFIX: &str = "/api/public/v1";

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the public campaign endpoints onto `router`.
///
/// Any site may fetch cross-origin; which content it receives is decided by
/// the resolver's domain check, so CORS mirrors the request origin.
#[must_use]
pub fn register_routes(router: Router, resolver: Arc<AccessResolver>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET]);

    let campaigns = Router::new()
        .route(
            &format!("{API_PREFIX}/visual_campaigns"),
            get(handlers::list_campaigns),
        )
        .route(
            &format!("{API_PREFIX}/visual_campaigns/{{key}}"),
            get(handlers::get_campaign),
        )
        .route(&format!("{API_PREFIX}/openapi.json"), get(openapi_json))
        .layer(Extension(resolver))
        .layer(cors);

    router.merge(campaigns)
}

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, Query};
use axum::http::{HeaderMap, StatusCode, Uri, header};

use super::dto::{CampaignResponse, CampaignsResponse, FormatQuery, ListCampaignsQuery};
use super::problem::{ApiResult, Problem};
use crate::domain::service::AccessResolver;

fn origin_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
}

fn ensure_json(format: Option<&str>, uri: &Uri) -> ApiResult<()> {
    match format {
        None | Some("json") => Ok(()),
        Some(other) => Err(Problem::new(
            StatusCode::NOT_ACCEPTABLE,
            "Not Acceptable",
            format!("Unsupported response format '{other}'"),
        )
        .with_code("VISUAL_CAMPAIGN_FORMAT")
        .with_instance(uri.path())),
    }
}

/// Resolve several campaigns by key for the requesting origin.
#[utoipa::path(
    get,
    path = "/api/public/v1/visual_campaigns",
    tag = "Visual Campaigns",
    params(
        ListCampaignsQuery,
        ("Origin" = Option<String>, Header, description = "Origin of the embedding page"),
    ),
    responses(
        (status = 200, description = "Campaigns the origin may embed, keyed by output key", body = CampaignsResponse),
        (status = 400, description = "Origin header missing", body = Problem, content_type = "application/problem+json"),
        (status = 406, description = "Unsupported format", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn list_campaigns(
    Extension(svc): Extension<Arc<AccessResolver>>,
    Query(query): Query<ListCampaignsQuery>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Json<CampaignsResponse>> {
    ensure_json(query.format.as_deref(), &uri)?;

    let campaigns = svc
        .resolve_multiple(origin_header(&headers), &query.key_list())
        .await
        .map_err(|e| Problem::from(e).with_instance(uri.path()))?;

    Ok(Json(campaigns.into()))
}

/// Resolve one campaign by key for the requesting origin.
#[utoipa::path(
    get,
    path = "/api/public/v1/visual_campaigns/{key}",
    tag = "Visual Campaigns",
    params(
        ("key" = String, Path, description = "Output key"),
        FormatQuery,
        ("Origin" = Option<String>, Header, description = "Origin of the embedding page"),
    ),
    responses(
        (status = 200, description = "One of the active campaigns the origin may embed", body = CampaignResponse),
        (status = 400, description = "Origin header missing", body = Problem, content_type = "application/problem+json"),
        (status = 401, description = "Origin not authorized for this key", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No active campaign for this key", body = Problem, content_type = "application/problem+json"),
        (status = 406, description = "Unsupported format", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn get_campaign(
    Extension(svc): Extension<Arc<AccessResolver>>,
    Path(key): Path<String>,
    Query(query): Query<FormatQuery>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Json<CampaignResponse>> {
    ensure_json(query.format.as_deref(), &uri)?;

    let campaign = svc
        .resolve_one(origin_header(&headers), &key)
        .await
        .map_err(|e| Problem::from(e).with_instance(uri.path()))?;

    Ok(Json(campaign.into()))
}

use utoipa::OpenApi;

use super::dto::{CampaignDto, CampaignResponse, CampaignsResponse};
use super::handlers;
use super::problem::Problem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visual Campaigns API",
        description = "Embeddable campaign markup, gated by activity and origin domain"
    ),
    paths(handlers::list_campaigns, handlers::get_campaign),
    components(schemas(CampaignDto, CampaignsResponse, CampaignResponse, Problem)),
    tags((name = "Visual Campaigns", description = "Public campaign lookup"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn document_lists_both_operations() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/public/v1/visual_campaigns"));
        assert!(paths.contains_key("/api/public/v1/visual_campaigns/{key}"));

        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("CampaignDto"));
        assert!(schemas.contains_key("Problem"));
    }
}

use axum::http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        // Span id of the current request span; logs carry the same span.
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());

        let (status, code, title, detail) = match &e {
            DomainError::MissingOrigin => (
                StatusCode::BAD_REQUEST,
                "VISUAL_CAMPAIGN_MISSING_ORIGIN",
                "Bad Request",
                "The Origin header is required".to_owned(),
            ),
            DomainError::Unauthorized { key, .. } => (
                StatusCode::UNAUTHORIZED,
                "VISUAL_CAMPAIGN_UNAUTHORIZED",
                "Unauthorized",
                format!("Origin is not authorized for visual campaign '{key}'"),
            ),
            DomainError::NotFound { key } => (
                StatusCode::NOT_FOUND,
                "VISUAL_CAMPAIGN_NOT_FOUND",
                "Not Found",
                format!("Visual campaign '{key}' not found"),
            ),
            DomainError::StorageFault(_) => {
                tracing::error!(error = ?e, "Campaign storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "VISUAL_CAMPAIGN_INTERNAL",
                    "Internal Server Error",
                    "An internal error occurred".to_owned(),
                )
            }
        };

        let mut problem = Problem::new(status, title, detail)
            .with_type(format!("https://errors.visual-campaigns.dev/{code}"))
            .with_code(code);

        if let Some(id) = trace_id {
            problem = problem.with_trace_id(id);
        }

        problem
    }
}

use actix_web::http::header::{ETAG, IF_MATCH};
use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{AckResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::modules::portfolio::application::ports::incoming::use_cases::ReplacePortfolioError;
use crate::shared::api::ApiResponse;
use crate::shared::storage::{IfMatch, Revision};
use crate::AppState;

// ───── Error mapping ─────

fn map_replace_portfolio_error(err: ReplacePortfolioError) -> HttpResponse {
    match err {
        ReplacePortfolioError::SchemaViolation(violations) => {
            warn!(count = violations.len(), "Rejected invalid portfolio document");
            ApiResponse::unprocessable(
                "SCHEMA_VIOLATION",
                "The portfolio document is invalid",
                violations.iter().map(ToString::to_string).collect(),
            )
        }

        ReplacePortfolioError::RevisionConflict => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "The portfolio was changed by someone else; reload and try again",
        ),

        ReplacePortfolioError::WriteFailure(e) => {
            error!(error = %e, "Failed to save portfolio");
            ApiResponse::internal_error_with("PORTFOLIO_WRITE_FAILED", "Failed to save portfolio data")
        }
    }
}

// ───── Route ─────

/// Replace the whole portfolio document
///
/// Admin only. Send `If-Match` with the `ETag` from a previous GET to refuse
/// the write when someone else saved in between.
#[utoipa::path(
    put,
    path = "/api/portfolio",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    request_body = PortfolioDocument,
    params(
        ("If-Match" = Option<String>, Header, description = "Expected current revision")
    ),
    responses(
        (status = 200, description = "Document stored", body = AckResponse,
            headers(("ETag" = String, description = "Revision of the stored document"))),
        (status = 400, description = "Body is not a portfolio document", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 409, description = "If-Match does not match the stored revision", body = ErrorResponse),
        (status = 422, description = "Document violates the schema", body = ErrorResponse),
        (status = 500, description = "Write failure", body = ErrorResponse),
    )
)]
#[put("/api/portfolio")]
pub async fn replace_portfolio_handler(
    _admin: AdminSession,
    req: HttpRequest,
    body: web::Json<PortfolioDocument>,
    data: web::Data<AppState>,
) -> impl Responder {
    let expected = match req.headers().get(IF_MATCH) {
        None => None,
        Some(value) => match value.to_str().ok().and_then(IfMatch::parse) {
            Some(precondition) => Some(precondition),
            None => {
                return ApiResponse::bad_request("VALIDATION_ERROR", "Malformed If-Match header")
            }
        },
    };

    match data
        .portfolio
        .replace
        .execute(body.into_inner(), expected)
        .await
    {
        Ok(revision) => HttpResponse::Ok()
            .insert_header((ETAG, revision.to_etag()))
            .json(serde_json::json!({ "success": true })),
        Err(e) => map_replace_portfolio_error(e),
    }
}

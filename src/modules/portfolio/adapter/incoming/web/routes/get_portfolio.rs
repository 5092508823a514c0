use actix_web::http::header::ETAG;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_get_portfolio_error(err: GetPortfolioError) -> HttpResponse {
    match err {
        GetPortfolioError::NotFoundOrCorrupt(e) => {
            error!(error = %e, "Failed to load portfolio");
            ApiResponse::internal_error_with("PORTFOLIO_UNAVAILABLE", "Failed to load portfolio data")
        }
    }
}

/// Get the portfolio document
///
/// Public. Returns the whole document as stored; the `ETag` header carries its
/// revision for use with `If-Match` on a later replace.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current portfolio document", body = PortfolioDocument,
            headers(("ETag" = String, description = "Revision of the returned document"))),
        (status = 500, description = "Document missing or unreadable", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get.execute().await {
        Ok(stored) => HttpResponse::Ok()
            .insert_header((ETAG, stored.revision.to_etag()))
            .json(stored.document),
        Err(e) => map_get_portfolio_error(e),
    }
}

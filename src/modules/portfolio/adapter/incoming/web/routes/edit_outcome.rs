use actix_web::http::header::ETAG;
use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use crate::modules::portfolio::application::domain::{PortfolioDocument, PortfolioEditError};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioError;
use crate::modules::portfolio::application::ports::outgoing::StoredPortfolio;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
struct EditedBody {
    success: bool,
    data: PortfolioDocument,
}

/// `{success, data: document}` with the new revision as `ETag`.
pub(super) fn edited(stored: StoredPortfolio, created: bool) -> HttpResponse {
    let mut builder = if created {
        HttpResponse::Created()
    } else {
        HttpResponse::Ok()
    };

    builder
        .insert_header((ETAG, stored.revision.to_etag()))
        .json(EditedBody {
            success: true,
            data: stored.document,
        })
}

pub(super) fn map_edit_portfolio_error(err: EditPortfolioError) -> HttpResponse {
    match err {
        EditPortfolioError::TargetNotFound(PortfolioEditError::EntryNotFound { section, id }) => {
            ApiResponse::not_found(
                "ENTRY_NOT_FOUND",
                &format!("No {section} entry with id '{id}'"),
            )
        }

        EditPortfolioError::TargetNotFound(PortfolioEditError::SkillNotFound {
            category,
            index,
        }) => ApiResponse::not_found(
            "SKILL_NOT_FOUND",
            &format!("No {category} skill at index {index}"),
        ),

        EditPortfolioError::SchemaViolation(violations) => ApiResponse::unprocessable(
            "SCHEMA_VIOLATION",
            "The edited portfolio is invalid",
            violations.iter().map(ToString::to_string).collect(),
        ),

        EditPortfolioError::NotFoundOrCorrupt(e) => {
            error!(error = %e, "Failed to load portfolio for editing");
            ApiResponse::internal_error_with(
                "PORTFOLIO_UNAVAILABLE",
                "Failed to load portfolio data",
            )
        }

        EditPortfolioError::WriteFailure(e) => {
            error!(error = %e, "Failed to save edited portfolio");
            ApiResponse::internal_error_with("PORTFOLIO_WRITE_FAILED", "Failed to save portfolio data")
        }
    }
}

/// Parses a path segment into a typed key, answering 404 when it names nothing.
pub(super) fn parse_key<T>(raw: &str, code: &str, what: &str) -> Result<T, HttpResponse>
where
    T: std::str::FromStr,
{
    raw.parse()
        .map_err(|_| ApiResponse::not_found(code, &format!("Unknown {what} '{raw}'")))
}

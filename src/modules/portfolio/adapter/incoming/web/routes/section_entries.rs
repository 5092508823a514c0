use actix_web::{delete, post, put, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::warn;

use super::edit_outcome::{edited, map_edit_portfolio_error, parse_key};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::domain::{Entry, PortfolioEdit, Section};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

fn parse_section(raw: &str) -> Result<Section, HttpResponse> {
    parse_key(raw, "UNKNOWN_SECTION", "section")
}

fn parse_entry(section: Section, body: Value) -> Result<Entry, HttpResponse> {
    Entry::from_json(section, body).map_err(|e| {
        warn!(section = %section, error = %e, "Rejected entry body");
        ApiResponse::bad_request("VALIDATION_ERROR", &format!("Invalid {section} entry: {e}"))
    })
}

async fn run(data: &AppState, edit: PortfolioEdit, created: bool) -> HttpResponse {
    match data.portfolio.edit.execute(edit).await {
        Ok(stored) => edited(stored, created),
        Err(e) => map_edit_portfolio_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Add an entry to a section
///
/// The server assigns the id. Projects, experience and testimonials are
/// inserted first; services are appended.
#[utoipa::path(
    post,
    path = "/api/portfolio/{section}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(("section" = String, Path, description = "projects | services | experience | testimonials")),
    request_body = Object,
    responses(
        (status = 201, description = "Entry added; body carries the stored document"),
        (status = 400, description = "Body does not match the section", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 404, description = "Unknown section", body = ErrorResponse),
        (status = 422, description = "Entry violates the schema", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/{section}")]
pub async fn add_entry_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = match parse_section(&path.into_inner()) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let entry = match parse_entry(section, body.into_inner()) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    run(&data, PortfolioEdit::AddEntry(entry), true).await
}

/// Replace an entry by id
#[utoipa::path(
    put,
    path = "/api/portfolio/{section}/{id}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(
        ("section" = String, Path, description = "projects | services | experience | testimonials"),
        ("id" = String, Path, description = "Entry id")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Entry replaced; body carries the stored document"),
        (status = 400, description = "Body does not match the section", body = ErrorResponse),
        (status = 404, description = "Unknown section or entry", body = ErrorResponse),
        (status = 422, description = "Entry violates the schema", body = ErrorResponse),
    )
)]
#[put("/api/portfolio/{section}/{id}")]
pub async fn update_entry_handler(
    _admin: AdminSession,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    let section = match parse_section(&section) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let entry = match parse_entry(section, body.into_inner()) {
        Ok(e) => e,
        Err(resp) => return resp,
    };

    run(&data, PortfolioEdit::UpdateEntry { id, entry }, false).await
}

/// Remove an entry by id
#[utoipa::path(
    delete,
    path = "/api/portfolio/{section}/{id}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(
        ("section" = String, Path, description = "projects | services | experience | testimonials"),
        ("id" = String, Path, description = "Entry id")
    ),
    responses(
        (status = 200, description = "Entry removed; body carries the stored document"),
        (status = 404, description = "Unknown section or entry", body = ErrorResponse),
    )
)]
#[delete("/api/portfolio/{section}/{id}")]
pub async fn remove_entry_handler(
    _admin: AdminSession,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    let section = match parse_section(&section) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    run(&data, PortfolioEdit::RemoveEntry { section, id }, false).await
}

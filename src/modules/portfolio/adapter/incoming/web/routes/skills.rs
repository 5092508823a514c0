use actix_web::{delete, post, put, web, HttpResponse, Responder};

use super::edit_outcome::{edited, map_edit_portfolio_error, parse_key};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::domain::{PortfolioEdit, Skill, SkillCategory};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn parse_category(raw: &str) -> Result<SkillCategory, HttpResponse> {
    parse_key(raw, "UNKNOWN_SKILL_CATEGORY", "skill category")
}

fn parse_index(raw: &str) -> Result<usize, HttpResponse> {
    raw.parse().map_err(|_| {
        ApiResponse::bad_request("VALIDATION_ERROR", "Skill index must be a non-negative integer")
    })
}

async fn run(data: &AppState, edit: PortfolioEdit, created: bool) -> HttpResponse {
    match data.portfolio.edit.execute(edit).await {
        Ok(stored) => edited(stored, created),
        Err(e) => map_edit_portfolio_error(e),
    }
}

/// Append a skill to a category
#[utoipa::path(
    post,
    path = "/api/portfolio/skills/{category}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(("category" = String, Path, description = "frontend | backend | database | tools")),
    request_body = Skill,
    responses(
        (status = 201, description = "Skill added; body carries the stored document"),
        (status = 404, description = "Unknown category", body = ErrorResponse),
        (status = 422, description = "Skill violates the schema", body = ErrorResponse),
    )
)]
#[post("/api/portfolio/skills/{category}")]
pub async fn add_skill_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    body: web::Json<Skill>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match parse_category(&path.into_inner()) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    run(
        &data,
        PortfolioEdit::AddSkill {
            category,
            skill: body.into_inner(),
        },
        true,
    )
    .await
}

/// Replace the skill at an index
#[utoipa::path(
    put,
    path = "/api/portfolio/skills/{category}/{index}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(
        ("category" = String, Path, description = "frontend | backend | database | tools"),
        ("index" = usize, Path, description = "Position within the category")
    ),
    request_body = Skill,
    responses(
        (status = 200, description = "Skill replaced; body carries the stored document"),
        (status = 404, description = "Unknown category or index out of range", body = ErrorResponse),
        (status = 422, description = "Skill violates the schema", body = ErrorResponse),
    )
)]
#[put("/api/portfolio/skills/{category}/{index}")]
pub async fn update_skill_handler(
    _admin: AdminSession,
    path: web::Path<(String, String)>,
    body: web::Json<Skill>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category, index) = path.into_inner();
    let (category, index) = match (parse_category(&category), parse_index(&index)) {
        (Ok(c), Ok(i)) => (c, i),
        (Err(resp), _) | (_, Err(resp)) => return resp,
    };

    run(
        &data,
        PortfolioEdit::UpdateSkill {
            category,
            index,
            skill: body.into_inner(),
        },
        false,
    )
    .await
}

/// Remove the skill at an index
#[utoipa::path(
    delete,
    path = "/api/portfolio/skills/{category}/{index}",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    params(
        ("category" = String, Path, description = "frontend | backend | database | tools"),
        ("index" = usize, Path, description = "Position within the category")
    ),
    responses(
        (status = 200, description = "Skill removed; body carries the stored document"),
        (status = 404, description = "Unknown category or index out of range", body = ErrorResponse),
    )
)]
#[delete("/api/portfolio/skills/{category}/{index}")]
pub async fn remove_skill_handler(
    _admin: AdminSession,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (category, index) = path.into_inner();
    let (category, index) = match (parse_category(&category), parse_index(&index)) {
        (Ok(c), Ok(i)) => (c, i),
        (Err(resp), _) | (_, Err(resp)) => return resp,
    };

    run(&data, PortfolioEdit::RemoveSkill { category, index }, false).await
}

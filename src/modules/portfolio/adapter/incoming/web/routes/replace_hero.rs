use actix_web::{put, web, Responder};

use super::edit_outcome::{edited, map_edit_portfolio_error};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::domain::{Hero, PortfolioEdit};
use crate::AppState;

/// Replace the hero section
#[utoipa::path(
    put,
    path = "/api/portfolio/hero",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    request_body = Hero,
    responses(
        (status = 200, description = "Hero replaced; body carries the stored document"),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 422, description = "Required hero field is blank", body = ErrorResponse),
        (status = 500, description = "Load or write failure", body = ErrorResponse),
    )
)]
#[put("/api/portfolio/hero")]
pub async fn replace_hero_handler(
    _admin: AdminSession,
    body: web::Json<Hero>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .edit
        .execute(PortfolioEdit::ReplaceHero(body.into_inner()))
        .await
    {
        Ok(stored) => edited(stored, false),
        Err(e) => map_edit_portfolio_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::stubs::RecordingEditPortfolioUseCase;

    #[actix_web::test]
    async fn test_replace_hero_sends_hero_edit() {
        // Arrange
        let use_case = RecordingEditPortfolioUseCase::applying_to_sample();
        let app_state = TestAppStateBuilder::default()
            .with_edit_portfolio(use_case.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(replace_hero_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::put()
            .uri("/api/portfolio/hero")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "name": "Ada Lovelace",
                "title": "Analyst",
                "description": "Writes programs for engines",
                "image": "/ada.png",
                "socialLinks": { "linkedin": "", "github": "", "email": "ada@example.com" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["hero"]["name"], "Ada Lovelace");
        assert!(matches!(
            use_case.last_edit(),
            Some(PortfolioEdit::ReplaceHero(hero)) if hero.title == "Analyst"
        ));
    }
}

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::application::ports::incoming::{DashboardStats, GetDashboardError};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_get_dashboard_error(err: GetDashboardError) -> HttpResponse {
    error!(error = %err, "Failed to build dashboard");
    match err {
        GetDashboardError::PortfolioUnavailable(_) => {
            ApiResponse::internal_error_with("PORTFOLIO_UNAVAILABLE", "Failed to load portfolio data")
        }
        GetDashboardError::MessagesUnavailable(_) => {
            ApiResponse::internal_error_with("MESSAGES_UNAVAILABLE", "Failed to load messages")
        }
    }
}

/// Admin landing page numbers
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 500, description = "Storage could not be read", body = ErrorResponse),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_dashboard_use_case.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => map_get_dashboard_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::dashboard::application::ports::incoming::GetDashboardUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::stubs::sample_message;

    struct MockGetDashboard(Result<DashboardStats, GetDashboardError>);

    #[async_trait]
    impl GetDashboardUseCase for MockGetDashboard {
        async fn execute(&self) -> Result<DashboardStats, GetDashboardError> {
            self.0.clone()
        }
    }

    async fn get_dashboard(use_case: MockGetDashboard, auth: bool) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_get_dashboard(use_case)
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(get_dashboard_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/api/admin/dashboard");
        if auth {
            req = req.insert_header(("Authorization", admin_bearer()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_dashboard_success() {
        let stats = DashboardStats {
            total_projects: 3,
            total_skills: 12,
            total_messages: 2,
            unread_messages: 1,
            recent_messages: vec![sample_message("m-2", false), sample_message("m-1", true)],
        };

        let (status, body) = get_dashboard(MockGetDashboard(Ok(stats)), true).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalProjects"], 3);
        assert_eq!(body["data"]["totalSkills"], 12);
        assert_eq!(body["data"]["unreadMessages"], 1);
        assert_eq!(body["data"]["recentMessages"][0]["id"], "m-2");
    }

    #[actix_web::test]
    async fn test_dashboard_requires_admin() {
        let (status, body) = get_dashboard(
            MockGetDashboard(Err(GetDashboardError::MessagesUnavailable("x".to_string()))),
            false,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_dashboard_storage_failure() {
        let (status, body) = get_dashboard(
            MockGetDashboard(Err(GetDashboardError::PortfolioUnavailable(
                "corrupt".to_string(),
            ))),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "PORTFOLIO_UNAVAILABLE");
    }
}

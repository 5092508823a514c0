use actix_web::{get, Responder};
use chrono::{TimeZone, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    #[schema(example = "admin")]
    pub subject: String,
    /// RFC 3339 expiry of the current token
    #[schema(example = "2026-10-16T18:00:00Z")]
    pub expires_at: String,
}

/// Current admin session
///
/// Lets the panel check whether its stored token is still accepted.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<AdminSessionResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/admin/session")]
pub async fn admin_session_handler(session: AdminSession) -> impl Responder {
    let expires_at = Utc
        .timestamp_opt(session.expires_at, 0)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();

    ApiResponse::success(AdminSessionResponse {
        subject: session.subject,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    #[actix_web::test]
    async fn test_session_reports_subject_and_expiry() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(admin_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["subject"], "admin");
        assert!(body["data"]["expiresAt"].as_str().unwrap().contains('T'));
    }

    #[actix_web::test]
    async fn test_session_without_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(admin_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/session").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

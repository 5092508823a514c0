use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::admin_login::{
    AdminLoginError, AdminLoginRequest, AdminLoginResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use utoipa::ToSchema;

/// Admin login request from the panel
#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    /// Admin access code
    #[schema(example = "correct-horse-battery-staple")]
    pub code: String,
}

fn map_admin_login_error(err: AdminLoginError) -> HttpResponse {
    match err {
        AdminLoginError::InvalidAccessCode => {
            ApiResponse::unauthorized("INVALID_ACCESS_CODE", "Invalid access code")
        }

        AdminLoginError::VerificationFailed(ref e) => {
            error!(error = %e, "Access code verification failed");
            ApiResponse::internal_error()
        }

        AdminLoginError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Admin login
///
/// Exchanges the admin access code for a short-lived bearer token.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<AdminLoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "tokenType": "Bearer",
                    "expiresIn": 28800
                }
            })
        ),
        (status = 400, description = "Empty access code", body = ErrorResponse),
        (
            status = 401,
            description = "Wrong access code",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_ACCESS_CODE",
                    "message": "Invalid access code"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match AdminLoginRequest::new(req.into_inner().code) {
        Ok(req) => req,
        Err(e) => {
            warn!("Admin login rejected: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.admin_login_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),
        Err(e) => map_admin_login_error(e),
    }
}

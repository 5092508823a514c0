use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{AckResponse, ErrorResponse};
use crate::modules::contact::application::domain::NewContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact form payload. Every field is required; absence is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactMessageRequestDto {
    #[schema(example = "Sarah")]
    pub name: Option<String>,
    #[schema(example = "sarah@x.com")]
    pub email: Option<String>,
    #[schema(example = "Hi")]
    pub subject: Option<String>,
    #[schema(example = "Hello")]
    pub message: Option<String>,
}

fn map_submit_message_error(err: SubmitMessageError) -> HttpResponse {
    match err {
        SubmitMessageError::WriteFailure(e) => {
            error!(error = %e, "Failed to store contact message");
            ApiResponse::internal_error_with("MESSAGE_WRITE_FAILED", "Failed to save message")
        }
    }
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessageRequestDto,
    responses(
        (status = 200, description = "Message stored", body = AckResponse),
        (status = 400, description = "A field is missing, blank or malformed", body = ErrorResponse),
        (status = 500, description = "Write failure", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_message_handler(
    body: web::Json<ContactMessageRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    let message = match NewContactMessage::new(dto.name, dto.email, dto.subject, dto.message) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "Rejected contact message");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.contact.submit.execute(message).await {
        Ok(_) => ApiResponse::ok(),
        Err(e) => map_submit_message_error(e),
    }
}

use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{AckResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::contact::application::domain::MessageAction;
use crate::modules::contact::application::ports::incoming::use_cases::UpdateMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequestDto {
    #[schema(example = "7d3f6a0e-2b1c-4f3e-9a51-0c2b5d8e1f44")]
    pub message_id: String,
    /// `markAsRead` or `delete`
    #[schema(example = "markAsRead")]
    pub action: String,
}

fn map_update_message_error(err: UpdateMessageError) -> HttpResponse {
    match err {
        UpdateMessageError::WriteFailure(e) => {
            error!(error = %e, "Failed to update contact message");
            ApiResponse::internal_error_with("MESSAGE_WRITE_FAILED", "Failed to update message")
        }
    }
}

/// Mark a message as read or delete it
///
/// Unknown ids are accepted and change nothing.
#[utoipa::path(
    patch,
    path = "/api/contact",
    tag = "contact",
    security(("BearerAuth" = [])),
    request_body = UpdateMessageRequestDto,
    responses(
        (status = 200, description = "Action applied", body = AckResponse),
        (status = 400, description = "Unknown action", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 500, description = "Write failure", body = ErrorResponse),
    )
)]
#[patch("/api/contact")]
pub async fn update_message_handler(
    _admin: AdminSession,
    body: web::Json<UpdateMessageRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    let action: MessageAction = match dto.action.parse() {
        Ok(a) => a,
        Err(e) => {
            warn!(error = %e, "Rejected message action");
            return ApiResponse::bad_request("INVALID_ACTION", &e.to_string());
        }
    };

    match data.contact.update.execute(&dto.message_id, action).await {
        Ok(()) => ApiResponse::ok(),
        Err(e) => map_update_message_error(e),
    }
}

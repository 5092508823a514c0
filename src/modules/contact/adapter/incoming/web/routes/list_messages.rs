use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::contact::application::domain::{ContactMessage, MessageFilter, MessageStatus};
use crate::modules::contact::application::ports::incoming::use_cases::ListMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMessagesQuery {
    /// `all` (default), `read` or `unread`
    pub status: Option<MessageStatus>,
    /// Case-insensitive match on name, email or subject
    pub search: Option<String>,
}

impl From<ListMessagesQuery> for MessageFilter {
    fn from(q: ListMessagesQuery) -> Self {
        MessageFilter {
            status: q.status.unwrap_or_default(),
            search: q.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

fn map_list_messages_error(err: ListMessagesError) -> HttpResponse {
    match err {
        ListMessagesError::LoadFailure(e) => {
            error!(error = %e, "Failed to load contact messages");
            ApiResponse::internal_error_with("MESSAGES_UNAVAILABLE", "Failed to load messages")
        }
    }
}

/// List contact messages, newest first
///
/// Returns the bare array, matching what the admin inbox consumes.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(ListMessagesQuery),
    responses(
        (status = 200, description = "Messages matching the filter", body = [ContactMessage]),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 500, description = "Messages could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn list_messages_handler(
    _admin: AdminSession,
    query: web::Query<ListMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute(query.into_inner().into()).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => map_list_messages_error(e),
    }
}

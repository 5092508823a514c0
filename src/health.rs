use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::shared::storage::{JsonFile, JsonFileError};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    portfolio: &'static str,
    #[schema(example = "ok")]
    messages: &'static str,
}

/// The two JSON files the readiness probe inspects.
#[derive(Clone)]
pub struct StorageProbe {
    pub portfolio: Arc<JsonFile>,
    pub messages: Arc<JsonFile>,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Portfolio document must exist and parse
/// - Messages file may be absent, but must parse when present
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Storage is usable", body = ReadinessResponse),
        (status = 503, description = "Storage is missing or corrupt", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(probe: web::Data<StorageProbe>) -> impl Responder {
    let portfolio_status = match probe.portfolio.read::<PortfolioDocument>().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: portfolio document unusable");
            "unhealthy"
        }
    };

    let messages_status = match probe.messages.read::<Vec<ContactMessage>>().await {
        Ok(_) | Err(JsonFileError::NotFound(_)) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: messages file unusable");
            "unhealthy"
        }
    };

    if portfolio_status == "ok" && messages_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            portfolio: portfolio_status,
            messages: messages_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            portfolio: portfolio_status,
            messages: messages_status,
        })
    }
}

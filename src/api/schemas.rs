// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Success without a payload
#[derive(Serialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = true)]
    pub success: bool,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "SCHEMA_VIOLATION")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "The portfolio document is invalid")]
    pub message: String,

    /// Individual problems, when there is more than one
    #[schema(example = json!(["testimonials[0].rating: must be between 1 and 5"]))]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

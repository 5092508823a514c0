use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{AccessCodeVerifier, TokenProvider};

/// Subject recorded in every admin session token. There is a single admin role.
pub const ADMIN_SUBJECT: &str = "admin";

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct AdminLoginRequest {
    code: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminLoginRequestError {
    #[error("Access code cannot be empty")]
    EmptyCode,
}

impl AdminLoginRequest {
    pub fn new(code: String) -> Result<Self, AdminLoginRequestError> {
        if code.trim().is_empty() {
            return Err(AdminLoginRequestError::EmptyCode);
        }
        Ok(Self { code })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for AdminLoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AdminLoginRequestHelper {
            code: String,
        }

        let helper = AdminLoginRequestHelper::deserialize(deserializer)?;
        AdminLoginRequest::new(helper.code).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid access code")]
    InvalidAccessCode,

    #[error("Access code verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================ Admin Login Use Case =============================
#[async_trait]
pub trait IAdminLoginUseCase: Send + Sync {
    async fn execute(&self, request: AdminLoginRequest)
        -> Result<AdminLoginResponse, AdminLoginError>;
}

#[derive(Clone)]
pub struct AdminLoginUseCase {
    verifier: Arc<dyn AccessCodeVerifier>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl AdminLoginUseCase {
    pub fn new(
        verifier: Arc<dyn AccessCodeVerifier>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            verifier,
            token_provider,
        }
    }
}

#[async_trait]
impl IAdminLoginUseCase for AdminLoginUseCase {
    async fn execute(
        &self,
        request: AdminLoginRequest,
    ) -> Result<AdminLoginResponse, AdminLoginError> {
        let is_valid = self
            .verifier
            .verify(request.code())
            .await
            .map_err(|e| AdminLoginError::VerificationFailed(e.to_string()))?;

        if !is_valid {
            tracing::warn!("Admin login rejected: wrong access code");
            return Err(AdminLoginError::InvalidAccessCode);
        }

        let issued = self
            .token_provider
            .issue_session_token(ADMIN_SUBJECT)
            .map_err(|e| AdminLoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(expires_at = issued.expires_at, "Admin session started");

        Ok(AdminLoginResponse {
            access_token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
        })
    }
}

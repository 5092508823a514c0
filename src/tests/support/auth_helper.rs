use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::admin_login::ADMIN_SUBJECT;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_32b";
pub const TEST_ISSUER: &str = "portfolio-cms-test";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        session_expiry: 3600,
    })
}

/// Same shape main registers as app data for the `AdminSession` extractor.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value carrying a valid admin session.
pub fn admin_bearer() -> String {
    let issued = test_jwt_service()
        .issue_session_token(ADMIN_SUBJECT)
        .expect("test token should sign");
    format!("Bearer {}", issued.token)
}

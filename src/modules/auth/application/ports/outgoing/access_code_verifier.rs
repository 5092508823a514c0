use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccessCodeError {
    #[error("Stored access code hash is unusable")]
    InvalidHash,

    #[error("Verification task failed")]
    TaskFailed,
}

/// Checks a submitted admin access code against the configured secret.
#[async_trait]
pub trait AccessCodeVerifier: Send + Sync {
    async fn verify(&self, code: &str) -> Result<bool, AccessCodeError>;
}

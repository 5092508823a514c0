use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailSendError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build email: {0}")]
    BuildFailed(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// A plain-text message. `reply_to` lets the recipient answer the original
/// sender directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError>;
}

use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Failed to store message: {0}")]
    WriteFailure(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    /// Stores the message unread at the head of the list and returns it.
    async fn execute(&self, message: NewContactMessage) -> Result<ContactMessage, SubmitMessageError>;
}

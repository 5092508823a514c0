use async_trait::async_trait;

use crate::modules::contact::application::domain::MessageAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMessageError {
    #[error("Messages could not be updated: {0}")]
    WriteFailure(String),
}

#[async_trait]
pub trait UpdateMessageUseCase: Send + Sync {
    /// Applies `action` to the message with `id`. Unknown ids are a no-op.
    async fn execute(&self, id: &str, action: MessageAction) -> Result<(), UpdateMessageError>;
}

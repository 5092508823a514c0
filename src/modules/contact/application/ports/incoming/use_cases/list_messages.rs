use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, MessageFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Messages could not be loaded: {0}")]
    LoadFailure(String),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ListMessagesError>;
}

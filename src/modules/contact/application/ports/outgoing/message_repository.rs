use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Messages file is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to read messages: {0}")]
    ReadFailed(String),

    #[error("Failed to write messages: {0}")]
    WriteFailed(String),
}

/// Newest-first list of contact messages. A missing store reads as empty.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError>;

    /// Inserts at the head of the list.
    async fn prepend(&self, message: ContactMessage) -> Result<(), MessageRepositoryError>;

    /// Returns whether a message with `id` existed.
    async fn mark_read(&self, id: &str) -> Result<bool, MessageRepositoryError>;

    /// Returns whether a message with `id` existed.
    async fn delete(&self, id: &str) -> Result<bool, MessageRepositoryError>;
}

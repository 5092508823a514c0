use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;

#[derive(Debug, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Told about every message after it has been stored.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn message_received(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError>;
}

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitMessageError, SubmitMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{ContactNotifier, MessageRepository};

pub struct SubmitMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier>,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message: NewContactMessage) -> Result<ContactMessage, SubmitMessageError> {
        let stored = message.into_message(Uuid::new_v4().to_string(), Utc::now());

        self.repository
            .prepend(stored.clone())
            .await
            .map_err(|e| SubmitMessageError::WriteFailure(e.to_string()))?;

        tracing::info!(message_id = %stored.id, "Contact message stored");

        // best effort: the message is already stored
        if let Err(e) = self.notifier.message_received(&stored).await {
            tracing::warn!(message_id = %stored.id, error = %e, "Contact notification failed");
        }

        Ok(stored)
    }
}

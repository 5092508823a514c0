use async_trait::async_trait;

use crate::modules::contact::application::domain::MessageAction;
use crate::modules::contact::application::ports::incoming::use_cases::{
    UpdateMessageError, UpdateMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::MessageRepository;

pub struct UpdateMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> UpdateMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateMessageUseCase for UpdateMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: &str, action: MessageAction) -> Result<(), UpdateMessageError> {
        let found = match action {
            MessageAction::MarkAsRead => self.repository.mark_read(id).await,
            MessageAction::Delete => self.repository.delete(id).await,
        }
        .map_err(|e| UpdateMessageError::WriteFailure(e.to_string()))?;

        if found {
            tracing::info!(message_id = %id, action = %action, "Contact message updated");
        } else {
            tracing::debug!(message_id = %id, action = %action, "No message with that id");
        }

        Ok(())
    }
}

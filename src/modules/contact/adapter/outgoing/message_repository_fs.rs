use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};
use crate::shared::storage::{JsonFile, JsonFileError};

/// Messages kept as one JSON array, bootstrapped to `[]` on first use.
#[derive(Clone)]
pub struct MessageRepositoryFs {
    file: Arc<JsonFile>,
}

impl MessageRepositoryFs {
    pub fn new(file: Arc<JsonFile>) -> Self {
        Self { file }
    }

    async fn modify<R, F>(&self, mutate: F) -> Result<R, MessageRepositoryError>
    where
        F: FnOnce(&mut Vec<ContactMessage>) -> R,
    {
        let (outcome, _) = self
            .file
            .update_or_default(|messages: &mut Vec<ContactMessage>| {
                Ok::<_, MessageRepositoryError>(mutate(messages))
            })
            .await?;
        Ok(outcome)
    }
}

impl From<JsonFileError> for MessageRepositoryError {
    fn from(err: JsonFileError) -> Self {
        match err {
            JsonFileError::Corrupt { .. } => MessageRepositoryError::Corrupt(err.to_string()),
            JsonFileError::NotFound(_) | JsonFileError::ReadFailed { .. } => {
                MessageRepositoryError::ReadFailed(err.to_string())
            }
            JsonFileError::WriteFailed { .. } | JsonFileError::Conflict => {
                MessageRepositoryError::WriteFailed(err.to_string())
            }
        }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryFs {
    async fn list(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        let snapshot = self.file.read_or_init(Vec::<ContactMessage>::new).await?;
        Ok(snapshot.value)
    }

    async fn prepend(&self, message: ContactMessage) -> Result<(), MessageRepositoryError> {
        self.modify(|messages| messages.insert(0, message)).await
    }

    async fn mark_read(&self, id: &str) -> Result<bool, MessageRepositoryError> {
        self.modify(|messages| match messages.iter_mut().find(|m| m.id == id) {
            Some(m) => {
                m.read = true;
                true
            }
            None => false,
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, MessageRepositoryError> {
        // Ids are millisecond timestamps and can collide; only the first match goes.
        self.modify(|messages| match messages.iter().position(|m| m.id == id) {
            Some(index) => {
                messages.remove(index);
                true
            }
            None => false,
        })
        .await
    }
}

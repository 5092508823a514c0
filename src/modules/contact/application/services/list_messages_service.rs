use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, MessageFilter};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::MessageRepository;

pub struct ListMessagesService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> ListMessagesService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListMessagesUseCase for ListMessagesService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ListMessagesError> {
        let messages = self
            .repository
            .list()
            .await
            .map_err(|e| ListMessagesError::LoadFailure(e.to_string()))?;

        Ok(messages.into_iter().filter(|m| m.matches(&filter)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::modules::contact::application::domain::MessageStatus;
    use crate::modules::contact::application::ports::outgoing::MessageRepositoryError;

    struct FixedRepo(Result<Vec<ContactMessage>, MessageRepositoryError>);

    #[async_trait]
    impl MessageRepository for FixedRepo {
        async fn list(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
            self.0.clone()
        }

        async fn prepend(&self, _message: ContactMessage) -> Result<(), MessageRepositoryError> {
            unimplemented!()
        }

        async fn mark_read(&self, _id: &str) -> Result<bool, MessageRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: &str) -> Result<bool, MessageRepositoryError> {
            unimplemented!()
        }
    }

    fn msg(id: &str, name: &str, read: bool) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Hello".to_string(),
            message: "Body".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            read,
        }
    }

    #[tokio::test]
    async fn test_no_filter_keeps_order() {
        let service = ListMessagesService::new(FixedRepo(Ok(vec![
            msg("2", "Bob", false),
            msg("1", "Alice", true),
        ])));

        let listed = service.execute(MessageFilter::default()).await.unwrap();

        let ids: Vec<_> = listed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_status_and_search_combine() {
        let service = ListMessagesService::new(FixedRepo(Ok(vec![
            msg("3", "Carol", false),
            msg("2", "Bob", false),
            msg("1", "Bobby", true),
        ])));

        let listed = service
            .execute(MessageFilter {
                status: MessageStatus::Unread,
                search: Some("bob".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "2");
    }

    #[tokio::test]
    async fn test_repository_error_is_load_failure() {
        let service = ListMessagesService::new(FixedRepo(Err(MessageRepositoryError::Corrupt(
            "expected array".to_string(),
        ))));

        let res = service.execute(MessageFilter::default()).await;

        assert!(matches!(res, Err(ListMessagesError::LoadFailure(_))));
    }
}

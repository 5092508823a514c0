use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier,
};
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

/// Forwards each new contact message to the site owner's mailbox.
#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender>,
    notify_to: String,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("notify_to", &self.notify_to)
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, notify_to: impl Into<String>) -> Self {
        Self {
            sender,
            notify_to: notify_to.into(),
        }
    }

    fn compose(&self, message: &ContactMessage) -> OutgoingEmail {
        OutgoingEmail {
            to: self.notify_to.clone(),
            reply_to: Some(message.email.clone()),
            subject: format!("[Portfolio] {}", message.subject),
            body: format!(
                "New message from your portfolio contact form.\n\n\
                 From: {} <{}>\n\
                 Received: {}\n\
                 Subject: {}\n\n\
                 {}\n",
                message.name,
                message.email,
                message.timestamp.to_rfc3339(),
                message.subject,
                message.message,
            ),
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn message_received(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(self.compose(message))
            .await
            .map_err(|e| ContactNotificationError::EmailSendingFailed(e.to_string()))?;

        tracing::info!(message_id = %message.id, "Contact notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    use crate::modules::email::application::ports::outgoing::EmailSendError;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError>;
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            id: "m-1".to_string(),
            name: "Sarah".to_string(),
            email: "sarah@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap(),
            read: false,
        }
    }

    #[tokio::test]
    async fn test_message_is_forwarded_to_owner_with_reply_to_sender() {
        // Arrange
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|email: &OutgoingEmail| {
                email.to == "owner@example.com"
                    && email.reply_to.as_deref() == Some("sarah@x.com")
                    && email.subject == "[Portfolio] Hi"
                    && email.body.contains("Hello there")
                    && email.body.contains("Sarah <sarah@x.com>")
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = ContactEmailService::new(Arc::new(sender), "owner@example.com");

        // Act
        let res = service.message_received(&message()).await;

        // Assert
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_| Err(EmailSendError::Transport("connection refused".to_string())));
        let service = ContactEmailService::new(Arc::new(sender), "owner@example.com");

        let res = service.message_received(&message()).await;

        assert!(matches!(
            res,
            Err(ContactNotificationError::EmailSendingFailed(msg)) if msg.contains("connection refused")
        ));
    }

    #[test]
    fn test_debug_hides_sender() {
        let service =
            ContactEmailService::new(Arc::new(MockEmailSenderMock::new()), "owner@example.com");

        assert_eq!(
            format!("{:?}", service),
            "ContactEmailService { sender: \"<dyn EmailSender>\", notify_to: \"owner@example.com\" }"
        );
    }
}

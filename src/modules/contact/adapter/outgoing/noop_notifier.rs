use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier,
};

/// Wired when no notification mailbox is configured.
pub struct NoopContactNotifier;

#[async_trait]
impl ContactNotifier for NoopContactNotifier {
    async fn message_received(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError> {
        tracing::debug!(message_id = %message.id, "Contact notifications disabled");
        Ok(())
    }
}

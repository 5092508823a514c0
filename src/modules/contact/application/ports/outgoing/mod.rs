mod contact_notifier;
mod message_repository;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use message_repository::{MessageRepository, MessageRepositoryError};

mod message_repository_fs;
mod noop_notifier;

pub use message_repository_fs::MessageRepositoryFs;
pub use noop_notifier::NoopContactNotifier;

mod list_messages;
mod submit_message;
mod update_message;

pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use submit_message::{SubmitMessageError, SubmitMessageUseCase};
pub use update_message::{UpdateMessageError, UpdateMessageUseCase};

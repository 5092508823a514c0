mod list_messages_service;
mod submit_message_service;
mod update_message_service;

pub use list_messages_service::ListMessagesService;
pub use submit_message_service::SubmitMessageService;
pub use update_message_service::UpdateMessageService;

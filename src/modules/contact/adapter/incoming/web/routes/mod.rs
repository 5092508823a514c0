mod list_messages;
mod submit_message;
mod update_message;

pub use list_messages::{__path_list_messages_handler, list_messages_handler, ListMessagesQuery};
pub use submit_message::{
    __path_submit_message_handler, submit_message_handler, ContactMessageRequestDto,
};
pub use update_message::{
    __path_update_message_handler, update_message_handler, UpdateMessageRequestDto,
};

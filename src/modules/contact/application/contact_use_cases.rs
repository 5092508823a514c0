use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase, UpdateMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateMessageUseCase + Send + Sync>,
}

use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioUseCase, ReplacePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPortfolioUseCase + Send + Sync>,
}

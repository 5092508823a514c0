use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::StoredPortfolio;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    /// Missing file, unreadable file, or content that is not a portfolio document.
    #[error("Portfolio could not be loaded: {0}")]
    NotFoundOrCorrupt(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<StoredPortfolio, GetPortfolioError>;
}

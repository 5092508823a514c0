use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, StoredPortfolio,
};

pub struct GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for GetPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<StoredPortfolio, GetPortfolioError> {
        self.repository.load().await.map_err(|e| match e {
            PortfolioRepositoryError::NotFound => {
                GetPortfolioError::NotFoundOrCorrupt("document does not exist".to_string())
            }
            PortfolioRepositoryError::Corrupt(msg) | PortfolioRepositoryError::ReadFailed(msg) => {
                GetPortfolioError::NotFoundOrCorrupt(msg)
            }
            // load never writes, so the remaining variants cannot occur here
            other => GetPortfolioError::NotFoundOrCorrupt(other.to_string()),
        })
    }
}

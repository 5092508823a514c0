use async_trait::async_trait;

use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::shared::storage::{IfMatch, Revision};

pub struct ReplacePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> ReplacePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplacePortfolioUseCase for ReplacePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        document: PortfolioDocument,
        expected: Option<IfMatch>,
    ) -> Result<Revision, ReplacePortfolioError> {
        document
            .validate()
            .map_err(ReplacePortfolioError::SchemaViolation)?;

        let revision = self
            .repository
            .replace(&document, expected.as_ref())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::RevisionConflict => {
                    ReplacePortfolioError::RevisionConflict
                }
                other => ReplacePortfolioError::WriteFailure(other.to_string()),
            })?;

        tracing::info!(revision = %revision, "Portfolio document replaced");
        Ok(revision)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::{PortfolioDocument, PortfolioEdit};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    DocumentMutation, EditRejection, PortfolioRepository, PortfolioRepositoryError,
    StoredPortfolio,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct EditPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> EditPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EditPortfolioUseCase for EditPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, edit: PortfolioEdit) -> Result<StoredPortfolio, EditPortfolioError> {
        let description = edit.describe();
        let part = edit.part();

        // Only the edited part is checked, so problems elsewhere in an older
        // file do not block unrelated edits.
        let mutation: DocumentMutation = Box::new(move |document: &mut PortfolioDocument| {
            edit.apply(document, || Uuid::new_v4().to_string())?;
            document.validate_part(part).map_err(EditRejection::Schema)
        });

        let stored = self
            .repository
            .modify(mutation)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::Rejected(EditRejection::Edit(err)) => {
                    EditPortfolioError::TargetNotFound(err)
                }
                PortfolioRepositoryError::Rejected(EditRejection::Schema(violations)) => {
                    EditPortfolioError::SchemaViolation(violations)
                }
                PortfolioRepositoryError::NotFound => {
                    EditPortfolioError::NotFoundOrCorrupt("document does not exist".to_string())
                }
                PortfolioRepositoryError::Corrupt(msg)
                | PortfolioRepositoryError::ReadFailed(msg) => {
                    EditPortfolioError::NotFoundOrCorrupt(msg)
                }
                PortfolioRepositoryError::WriteFailed(msg) => EditPortfolioError::WriteFailure(msg),
                // modify never compares revisions
                PortfolioRepositoryError::RevisionConflict => EditPortfolioError::WriteFailure(
                    "unexpected revision conflict while editing portfolio".to_string(),
                ),
            })?;

        tracing::info!(edit = %description, revision = %stored.revision, "Portfolio edited");
        Ok(stored)
    }
}

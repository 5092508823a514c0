use async_trait::async_trait;

use crate::modules::portfolio::application::domain::{PortfolioDocument, SchemaViolation};
use crate::shared::storage::{IfMatch, Revision};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplacePortfolioError {
    #[error("Document violates the portfolio schema")]
    SchemaViolation(Vec<SchemaViolation>),

    #[error("Document changed since it was read")]
    RevisionConflict,

    #[error("Write failure: {0}")]
    WriteFailure(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReplacePortfolioUseCase: Send + Sync {
    /// Stores `document` as the new portfolio and returns its revision.
    async fn execute(
        &self,
        document: PortfolioDocument,
        expected: Option<IfMatch>,
    ) -> Result<Revision, ReplacePortfolioError>;
}

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::{
    PortfolioEdit, PortfolioEditError, SchemaViolation,
};
use crate::modules::portfolio::application::ports::outgoing::StoredPortfolio;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPortfolioError {
    #[error(transparent)]
    TargetNotFound(PortfolioEditError),

    #[error("Edited document violates the portfolio schema")]
    SchemaViolation(Vec<SchemaViolation>),

    #[error("Portfolio could not be loaded: {0}")]
    NotFoundOrCorrupt(String),

    #[error("Write failure: {0}")]
    WriteFailure(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditPortfolioUseCase: Send + Sync {
    /// Applies one edit to the stored document and returns what was written.
    async fn execute(&self, edit: PortfolioEdit) -> Result<StoredPortfolio, EditPortfolioError>;
}

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::{
    PortfolioDocument, PortfolioEditError, SchemaViolation,
};
use crate::shared::storage::{IfMatch, Revision};

/// The document together with the revision it was read at (or written as).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPortfolio {
    pub document: PortfolioDocument,
    pub revision: Revision,
}

/// Why a mutation refused to produce a new document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditRejection {
    #[error(transparent)]
    Edit(#[from] PortfolioEditError),

    #[error("edited document violates the schema")]
    Schema(Vec<SchemaViolation>),
}

/// Runs against the freshly read document while the writer lock is held.
/// Returning an error aborts the write.
pub type DocumentMutation =
    Box<dyn FnOnce(&mut PortfolioDocument) -> Result<(), EditRejection> + Send>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio document does not exist")]
    NotFound,

    #[error("Portfolio document is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to read portfolio document: {0}")]
    ReadFailed(String),

    #[error("Failed to write portfolio document: {0}")]
    WriteFailed(String),

    #[error("Portfolio document changed since it was read")]
    RevisionConflict,

    #[error("Edit rejected: {0}")]
    Rejected(EditRejection),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn load(&self) -> Result<StoredPortfolio, PortfolioRepositoryError>;

    /// Overwrites the stored document. With `expected` set, fails with
    /// `RevisionConflict` unless the stored revision satisfies it.
    async fn replace(
        &self,
        document: &PortfolioDocument,
        expected: Option<&IfMatch>,
    ) -> Result<Revision, PortfolioRepositoryError>;

    /// Read, mutate and write as one step with respect to other writers.
    async fn modify(
        &self,
        mutation: DocumentMutation,
    ) -> Result<StoredPortfolio, PortfolioRepositoryError>;
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::application::domain::PortfolioDocument;
use crate::modules::portfolio::application::ports::outgoing::{
    DocumentMutation, PortfolioRepository, PortfolioRepositoryError, StoredPortfolio,
};
use crate::shared::storage::{IfMatch, JsonFile, JsonFileError, Revision};

/// Portfolio document kept in a single pretty-printed JSON file.
///
/// Clones share the underlying [`JsonFile`] and therefore its writer lock.
#[derive(Clone)]
pub struct PortfolioRepositoryFs {
    file: Arc<JsonFile>,
}

impl PortfolioRepositoryFs {
    pub fn new(file: Arc<JsonFile>) -> Self {
        Self { file }
    }
}

impl From<JsonFileError> for PortfolioRepositoryError {
    fn from(err: JsonFileError) -> Self {
        match err {
            JsonFileError::NotFound(_) => PortfolioRepositoryError::NotFound,
            JsonFileError::Corrupt { .. } => PortfolioRepositoryError::Corrupt(err.to_string()),
            JsonFileError::ReadFailed { .. } => {
                PortfolioRepositoryError::ReadFailed(err.to_string())
            }
            JsonFileError::WriteFailed { .. } => {
                PortfolioRepositoryError::WriteFailed(err.to_string())
            }
            JsonFileError::Conflict => PortfolioRepositoryError::RevisionConflict,
        }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryFs {
    async fn load(&self) -> Result<StoredPortfolio, PortfolioRepositoryError> {
        let snapshot = self.file.read::<PortfolioDocument>().await?;
        Ok(StoredPortfolio {
            document: snapshot.value,
            revision: snapshot.revision,
        })
    }

    async fn replace(
        &self,
        document: &PortfolioDocument,
        expected: Option<&IfMatch>,
    ) -> Result<Revision, PortfolioRepositoryError> {
        Ok(self.file.write(document, expected).await?)
    }

    async fn modify(
        &self,
        mutation: DocumentMutation,
    ) -> Result<StoredPortfolio, PortfolioRepositoryError> {
        let (document, revision) = self
            .file
            .update(|document: &mut PortfolioDocument| {
                mutation(document).map_err(PortfolioRepositoryError::Rejected)?;
                Ok::<_, PortfolioRepositoryError>(document.clone())
            })
            .await?;

        Ok(StoredPortfolio { document, revision })
    }
}

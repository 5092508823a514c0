use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::ContactMessage;

/// Counts shown on the admin landing page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    /// Across all four skill categories.
    pub total_skills: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
    /// Newest first, at most [`RECENT_MESSAGES`].
    pub recent_messages: Vec<ContactMessage>,
}

pub const RECENT_MESSAGES: usize = 5;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Portfolio could not be loaded: {0}")]
    PortfolioUnavailable(String),

    #[error("Messages could not be loaded: {0}")]
    MessagesUnavailable(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError>;
}

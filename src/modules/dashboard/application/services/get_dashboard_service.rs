use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::MessageRepository;
use crate::modules::dashboard::application::ports::incoming::{
    DashboardStats, GetDashboardError, GetDashboardUseCase, RECENT_MESSAGES,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;

pub struct GetDashboardService<P, M>
where
    P: PortfolioRepository,
    M: MessageRepository,
{
    portfolio: P,
    messages: M,
}

impl<P, M> GetDashboardService<P, M>
where
    P: PortfolioRepository,
    M: MessageRepository,
{
    pub fn new(portfolio: P, messages: M) -> Self {
        Self {
            portfolio,
            messages,
        }
    }
}

#[async_trait]
impl<P, M> GetDashboardUseCase for GetDashboardService<P, M>
where
    P: PortfolioRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError> {
        let (portfolio, messages) = tokio::join!(self.portfolio.load(), self.messages.list());

        let document = portfolio
            .map_err(|e| GetDashboardError::PortfolioUnavailable(e.to_string()))?
            .document;
        let messages = messages.map_err(|e| GetDashboardError::MessagesUnavailable(e.to_string()))?;

        Ok(DashboardStats {
            total_projects: document.projects.len(),
            total_skills: document.skills.total(),
            total_messages: messages.len(),
            unread_messages: messages.iter().filter(|m| !m.read).count(),
            recent_messages: messages.into_iter().take(RECENT_MESSAGES).collect(),
        })
    }
}

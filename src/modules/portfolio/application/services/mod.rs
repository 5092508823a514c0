mod edit_portfolio_service;
mod get_portfolio_service;
mod replace_portfolio_service;

pub use edit_portfolio_service::EditPortfolioService;
pub use get_portfolio_service::GetPortfolioService;
pub use replace_portfolio_service::ReplacePortfolioService;

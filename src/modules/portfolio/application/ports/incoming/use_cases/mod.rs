mod edit_portfolio;
mod get_portfolio;
mod replace_portfolio;

pub use edit_portfolio::{EditPortfolioError, EditPortfolioUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use replace_portfolio::{ReplacePortfolioError, ReplacePortfolioUseCase};

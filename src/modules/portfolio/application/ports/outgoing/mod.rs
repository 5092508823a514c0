mod portfolio_repository;

pub use portfolio_repository::{
    DocumentMutation, EditRejection, PortfolioRepository, PortfolioRepositoryError,
    StoredPortfolio,
};

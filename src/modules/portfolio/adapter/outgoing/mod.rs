mod portfolio_repository_fs;

pub use portfolio_repository_fs::PortfolioRepositoryFs;

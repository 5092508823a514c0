pub mod get_dashboard;

pub use get_dashboard::{DashboardStats, GetDashboardError, GetDashboardUseCase, RECENT_MESSAGES};

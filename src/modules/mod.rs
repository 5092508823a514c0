pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod email;
pub mod portfolio;

pub mod edits;
pub mod entities;
pub mod validation;

pub use edits::{PortfolioEdit, PortfolioEditError};
pub use entities::*;
pub use validation::{DocumentPart, SchemaViolation};

pub mod jwt;
pub mod security;

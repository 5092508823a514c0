pub mod access_code_verifier;
pub mod token_provider;

pub use access_code_verifier::{AccessCodeError, AccessCodeVerifier};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};

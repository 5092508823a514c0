use crate::config::{parse_or, optional, required, ConfigError, Lookup};

/// HS256 needs a key of at least this many bytes.
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "JWT_SECRET")?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters long for HS256"),
            });
        }

        let session_expiry = parse_or(lookup, "ADMIN_SESSION_EXPIRY", 28800i64)?;
        if !(60..=604800).contains(&session_expiry) {
            return Err(ConfigError::Invalid {
                name: "ADMIN_SESSION_EXPIRY",
                reason: "must be between 60 and 604800 seconds".to_string(),
            });
        }

        let issuer = optional(lookup, "JWT_ISSUER").unwrap_or_else(|| "portfolio_cms".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}

use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::access_code_verifier::{
    AccessCodeError, AccessCodeVerifier,
};

/// Verifies the admin access code against an Argon2 PHC string.
#[derive(Clone)]
pub struct Argon2AccessCodeVerifier {
    hash: String,
}

impl Argon2AccessCodeVerifier {
    /// Uses a PHC string produced elsewhere, e.g. by `argon2` on the command line.
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, AccessCodeError> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|_| AccessCodeError::InvalidHash)?;
        Ok(Self { hash })
    }

    /// Hashes a plain code once so it never has to be compared in the clear.
    pub fn from_plain_code(code: &str) -> Result<Self, AccessCodeError> {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let params = Params::new(4 * 1024, 3, 1, None).map_err(|_| AccessCodeError::InvalidHash)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(code.as_bytes(), &salt)
            .map_err(|_| AccessCodeError::InvalidHash)?
            .to_string();

        Ok(Self { hash })
    }
}

#[async_trait]
impl AccessCodeVerifier for Argon2AccessCodeVerifier {
    async fn verify(&self, code: &str) -> Result<bool, AccessCodeError> {
        let code = code.to_string();
        let hash = self.hash.clone();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| AccessCodeError::InvalidHash)?;

            match Argon2::default().verify_password(code.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(AccessCodeError::InvalidHash),
            }
        })
        .await
        .map_err(|_| AccessCodeError::TaskFailed)?
    }
}

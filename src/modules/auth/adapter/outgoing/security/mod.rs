mod argon2_access_code;

pub use argon2_access_code::Argon2AccessCodeVerifier;

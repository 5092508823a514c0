use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

/// Reads one environment variable. Abstracted so tests can feed a map.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub(crate) fn optional(lookup: Lookup, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}

pub(crate) fn required(lookup: Lookup, name: &'static str) -> Result<String, ConfigError> {
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

pub(crate) fn parse_or<T>(lookup: Lookup, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(lookup, name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// How the admin access code is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAccessConfig {
    /// Argon2 PHC string.
    Hash(String),
    /// Plain code, hashed once at startup.
    PlainCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpTransportConfig {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local relay such as Mailpit, used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub transport: SmtpTransportConfig,
    pub from: String,
    pub notify_to: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub portfolio_file: PathBuf,
    pub messages_file: PathBuf,
    pub jwt: JwtConfig,
    pub admin_access: AdminAccessConfig,
    /// `None` disables new-message notifications.
    pub notifications: Option<NotificationConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let host = optional(lookup, "HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(lookup, "PORT", 8080u16)?;

        let portfolio_file = optional(lookup, "PORTFOLIO_FILE")
            .unwrap_or_else(|| "data/portfolio.json".to_string())
            .into();
        let messages_file = optional(lookup, "MESSAGES_FILE")
            .unwrap_or_else(|| "data/messages.json".to_string())
            .into();

        let jwt = JwtConfig::from_lookup(lookup)?;

        let admin_access = match (
            optional(lookup, "ADMIN_ACCESS_CODE_HASH"),
            optional(lookup, "ADMIN_ACCESS_CODE"),
        ) {
            (Some(hash), _) => AdminAccessConfig::Hash(hash),
            (None, Some(code)) => AdminAccessConfig::PlainCode(code),
            (None, None) => return Err(ConfigError::Missing("ADMIN_ACCESS_CODE_HASH")),
        };

        let notifications = Self::notifications(lookup)?;

        Ok(Self {
            host,
            port,
            portfolio_file,
            messages_file,
            jwt,
            admin_access,
            notifications,
        })
    }

    fn notifications(lookup: Lookup) -> Result<Option<NotificationConfig>, ConfigError> {
        let Some(notify_to) = optional(lookup, "CONTACT_NOTIFY_EMAIL") else {
            return Ok(None);
        };
        let from = required(lookup, "EMAIL_FROM")?;

        let transport = if optional(lookup, "RUST_ENV").as_deref() == Some("test") {
            SmtpTransportConfig::Local {
                host: optional(lookup, "SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(lookup, "SMTP_PORT", 1025u16)?,
            }
        } else {
            SmtpTransportConfig::Relay {
                server: required(lookup, "SMTP_SERVER")?,
                username: required(lookup, "SMTP_USERNAME")?,
                password: required(lookup, "SMTP_PASSWORD")?,
            }
        };

        Ok(Some(NotificationConfig {
            transport,
            from,
            notify_to,
        }))
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

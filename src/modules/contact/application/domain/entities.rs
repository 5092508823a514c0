use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Stored message
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl ContactMessage {
    pub fn matches(&self, filter: &MessageFilter) -> bool {
        let status_ok = match filter.status {
            MessageStatus::All => true,
            MessageStatus::Read => self.read,
            MessageStatus::Unread => !self.read,
        };

        status_ok
            && filter.search.as_deref().map_or(true, |needle| {
                let needle = needle.to_lowercase();
                [&self.name, &self.email, &self.subject]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Submission
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// A visitor's submission whose four fields are present and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewContactMessage {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let subject = required("subject", subject)?;
        let message = required("message", message)?;

        if !EmailAddress::is_valid(email.trim()) {
            return Err(ContactValidationError::InvalidEmail(email));
        }

        Ok(Self {
            name,
            email: email.trim().to_string(),
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stamps the submission into an unread stored message.
    pub fn into_message(self, id: String, timestamp: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp,
            read: false,
        }
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ContactValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContactValidationError::MissingField(field)),
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing filter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    All,
    Read,
    Unread,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub status: MessageStatus,
    /// Case-insensitive substring of name, email or subject.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Admin action
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum MessageAction {
    MarkAsRead,
    Delete,
}

impl MessageAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageAction::MarkAsRead => "markAsRead",
            MessageAction::Delete => "delete",
        }
    }
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for MessageAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markAsRead" => Ok(MessageAction::MarkAsRead),
            "delete" => Ok(MessageAction::Delete),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

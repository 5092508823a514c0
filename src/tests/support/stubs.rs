use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::auth::application::use_cases::admin_login::{
    AdminLoginError, AdminLoginRequest, AdminLoginResponse, IAdminLoginUseCase,
};
use crate::modules::contact::application::domain::{
    ContactMessage, MessageAction, MessageFilter, NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, SubmitMessageError, SubmitMessageUseCase,
    UpdateMessageError, UpdateMessageUseCase,
};
use crate::modules::dashboard::application::ports::incoming::{
    DashboardStats, GetDashboardError, GetDashboardUseCase,
};
use crate::modules::portfolio::application::domain::{PortfolioDocument, PortfolioEdit};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioUseCase, GetPortfolioError, GetPortfolioUseCase,
    ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::StoredPortfolio;
use crate::shared::storage::{IfMatch, Revision};
use crate::tests::support::portfolio_fixtures::sample_document;

pub fn sample_message(id: &str, read: bool) -> ContactMessage {
    ContactMessage {
        id: id.to_string(),
        name: "Sarah Connor".to_string(),
        email: "sarah@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "Are you available next month?".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        read,
    }
}

// ======================= Portfolio =======================

pub struct StubGetPortfolioUseCase {
    pub result: Result<StoredPortfolio, GetPortfolioError>,
}

impl StubGetPortfolioUseCase {
    pub fn found(document: PortfolioDocument, revision: Revision) -> Self {
        Self {
            result: Ok(StoredPortfolio { document, revision }),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(GetPortfolioError::NotFoundOrCorrupt(reason.to_string())),
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<StoredPortfolio, GetPortfolioError> {
        self.result.clone()
    }
}

pub struct StubReplacePortfolioUseCase;

#[async_trait]
impl ReplacePortfolioUseCase for StubReplacePortfolioUseCase {
    async fn execute(
        &self,
        _document: PortfolioDocument,
        _expected: Option<IfMatch>,
    ) -> Result<Revision, ReplacePortfolioError> {
        Ok(Revision::of(b"stub"))
    }
}

/// Applies edits to a fresh copy of the sample document and remembers the
/// last edit it was asked to perform.
#[derive(Clone)]
pub struct RecordingEditPortfolioUseCase {
    failure: Option<EditPortfolioError>,
    last: Arc<Mutex<Option<PortfolioEdit>>>,
}

impl RecordingEditPortfolioUseCase {
    pub fn applying_to_sample() -> Self {
        Self {
            failure: None,
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: EditPortfolioError) -> Self {
        Self {
            failure: Some(error),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_edit(&self) -> Option<PortfolioEdit> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl EditPortfolioUseCase for RecordingEditPortfolioUseCase {
    async fn execute(&self, edit: PortfolioEdit) -> Result<StoredPortfolio, EditPortfolioError> {
        *self.last.lock().unwrap() = Some(edit.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut document = sample_document();
        edit.apply(&mut document, || "generated-id".to_string())
            .map_err(EditPortfolioError::TargetNotFound)?;

        Ok(StoredPortfolio {
            document,
            revision: Revision::of(b"edited"),
        })
    }
}

// ======================= Admin =======================

pub struct StubAdminLoginUseCase;

#[async_trait]
impl IAdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(
        &self,
        _request: AdminLoginRequest,
    ) -> Result<AdminLoginResponse, AdminLoginError> {
        Err(AdminLoginError::InvalidAccessCode)
    }
}

pub struct StubGetDashboardUseCase;

#[async_trait]
impl GetDashboardUseCase for StubGetDashboardUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError> {
        Ok(DashboardStats {
            total_projects: 0,
            total_skills: 0,
            total_messages: 0,
            unread_messages: 0,
            recent_messages: vec![],
        })
    }
}

// ======================= Contact =======================

#[derive(Clone)]
pub struct StubSubmitMessageUseCase {
    failure: Option<String>,
    submitted: Arc<Mutex<Vec<String>>>,
}

impl StubSubmitMessageUseCase {
    pub fn accepting() -> Self {
        Self {
            failure: None,
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sender names of every message that reached the use case.
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(&self, message: NewContactMessage) -> Result<ContactMessage, SubmitMessageError> {
        self.submitted.lock().unwrap().push(message.name().to_string());

        match &self.failure {
            Some(reason) => Err(SubmitMessageError::WriteFailure(reason.clone())),
            None => Ok(message.into_message("m-new".to_string(), Utc::now())),
        }
    }
}

#[derive(Clone)]
pub struct StubListMessagesUseCase {
    result: Result<Vec<ContactMessage>, ListMessagesError>,
    last_filter: Arc<Mutex<Option<MessageFilter>>>,
}

impl StubListMessagesUseCase {
    pub fn returning(messages: Vec<ContactMessage>) -> Self {
        Self {
            result: Ok(messages),
            last_filter: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(ListMessagesError::LoadFailure(reason.to_string())),
            last_filter: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_filter(&self) -> Option<MessageFilter> {
        self.last_filter.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self, filter: MessageFilter) -> Result<Vec<ContactMessage>, ListMessagesError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateMessageUseCase {
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(String, MessageAction)>>>,
}

impl StubUpdateMessageUseCase {
    pub fn accepting() -> Self {
        Self {
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(String, MessageAction)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdateMessageUseCase for StubUpdateMessageUseCase {
    async fn execute(&self, id: &str, action: MessageAction) -> Result<(), UpdateMessageError> {
        self.calls.lock().unwrap().push((id.to_string(), action));

        match &self.failure {
            Some(reason) => Err(UpdateMessageError::WriteFailure(reason.clone())),
            None => Ok(()),
        }
    }
}

use crate::auth::application::use_cases::admin_login::IAdminLoginUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase, UpdateMessageUseCase,
};
use crate::modules::dashboard::application::ports::incoming::GetDashboardUseCase;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioUseCase, GetPortfolioUseCase, ReplacePortfolioUseCase,
};
use crate::shared::storage::Revision;
use crate::tests::support::portfolio_fixtures::sample_document;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    replace_portfolio: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
    edit_portfolio: Arc<dyn EditPortfolioUseCase + Send + Sync>,
    submit_message: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    list_messages: Arc<dyn ListMessagesUseCase + Send + Sync>,
    update_message: Arc<dyn UpdateMessageUseCase + Send + Sync>,
    admin_login: Arc<dyn IAdminLoginUseCase + Send + Sync>,
    get_dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_portfolio: Arc::new(StubGetPortfolioUseCase::found(
                sample_document(),
                Revision::of(b"default"),
            )),
            replace_portfolio: Arc::new(StubReplacePortfolioUseCase),
            edit_portfolio: Arc::new(RecordingEditPortfolioUseCase::applying_to_sample()),
            submit_message: Arc::new(StubSubmitMessageUseCase::accepting()),
            list_messages: Arc::new(StubListMessagesUseCase::returning(vec![])),
            update_message: Arc::new(StubUpdateMessageUseCase::accepting()),
            admin_login: Arc::new(StubAdminLoginUseCase),
            get_dashboard: Arc::new(StubGetDashboardUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_replace_portfolio(
        mut self,
        uc: impl ReplacePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.replace_portfolio = Arc::new(uc);
        self
    }

    pub fn with_edit_portfolio(
        mut self,
        uc: impl EditPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.edit_portfolio = Arc::new(uc);
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_message = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_messages = Arc::new(uc);
        self
    }

    pub fn with_update_message(
        mut self,
        uc: impl UpdateMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_message = Arc::new(uc);
        self
    }

    pub fn with_admin_login(mut self, uc: impl IAdminLoginUseCase + Send + Sync + 'static) -> Self {
        self.admin_login = Arc::new(uc);
        self
    }

    pub fn with_get_dashboard(
        mut self,
        uc: impl GetDashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_dashboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get: self.get_portfolio,
                replace: self.replace_portfolio,
                edit: self.edit_portfolio,
            },
            contact: ContactUseCases {
                submit: self.submit_message,
                list: self.list_messages,
                update: self.update_message,
            },
            admin_login_use_case: self.admin_login,
            get_dashboard_use_case: self.get_dashboard,
        })
    }
}

pub mod modules;
pub use modules::auth;
pub use modules::contact;
pub use modules::dashboard;
pub use modules::email;
pub use modules::portfolio;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2AccessCodeVerifier;
use crate::auth::application::ports::outgoing::{AccessCodeVerifier, TokenProvider};
use crate::auth::application::use_cases::admin_login::{AdminLoginUseCase, IAdminLoginUseCase};
use crate::config::{AdminAccessConfig, AppConfig, NotificationConfig, SmtpTransportConfig};
use crate::contact::adapter::outgoing::{MessageRepositoryFs, NoopContactNotifier};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::outgoing::ContactNotifier;
use crate::contact::application::services::{
    ListMessagesService, SubmitMessageService, UpdateMessageService,
};
use crate::dashboard::application::ports::incoming::GetDashboardUseCase;
use crate::dashboard::application::services::GetDashboardService;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSendError;
use crate::email::application::services::ContactEmailService;
use crate::health::StorageProbe;
use crate::portfolio::adapter::outgoing::PortfolioRepositoryFs;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::services::{
    EditPortfolioService, GetPortfolioService, ReplacePortfolioService,
};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::storage::JsonFile;

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub contact: ContactUseCases,
    pub admin_login_use_case: Arc<dyn IAdminLoginUseCase + Send + Sync>,
    pub get_dashboard_use_case: Arc<dyn GetDashboardUseCase + Send + Sync>,
}

/// Wires every file-backed use case. Both repositories of a file share one
/// [`JsonFile`], so all writers of that file go through the same lock.
pub fn build_app_state(
    portfolio_file: Arc<JsonFile>,
    messages_file: Arc<JsonFile>,
    notifier: Arc<dyn ContactNotifier>,
    admin_login_use_case: Arc<dyn IAdminLoginUseCase + Send + Sync>,
) -> AppState {
    let portfolio_repo = PortfolioRepositoryFs::new(portfolio_file);
    let message_repo = MessageRepositoryFs::new(messages_file);

    AppState {
        portfolio: PortfolioUseCases {
            get: Arc::new(GetPortfolioService::new(portfolio_repo.clone())),
            replace: Arc::new(ReplacePortfolioService::new(portfolio_repo.clone())),
            edit: Arc::new(EditPortfolioService::new(portfolio_repo.clone())),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitMessageService::new(message_repo.clone(), notifier)),
            list: Arc::new(ListMessagesService::new(message_repo.clone())),
            update: Arc::new(UpdateMessageService::new(message_repo.clone())),
        },
        admin_login_use_case,
        get_dashboard_use_case: Arc::new(GetDashboardService::new(portfolio_repo, message_repo)),
    }
}

fn build_notifier(
    config: Option<&NotificationConfig>,
) -> Result<Arc<dyn ContactNotifier>, EmailSendError> {
    let Some(config) = config else {
        tracing::warn!("CONTACT_NOTIFY_EMAIL not set; contact notifications disabled");
        return Ok(Arc::new(NoopContactNotifier));
    };

    let sender = match &config.transport {
        SmtpTransportConfig::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &config.from)?
        }
        SmtpTransportConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.from)?,
    };

    Ok(Arc::new(ContactEmailService::new(
        Arc::new(sender),
        config.notify_to.clone(),
    )))
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let verifier = match &config.admin_access {
        AdminAccessConfig::Hash(hash) => Argon2AccessCodeVerifier::from_hash(hash.clone()),
        AdminAccessConfig::PlainCode(code) => {
            tracing::warn!("ADMIN_ACCESS_CODE is set in plain text; prefer ADMIN_ACCESS_CODE_HASH");
            Argon2AccessCodeVerifier::from_plain_code(code)
        }
    }
    .map_err(|e| startup_error("Admin access code", e))?;
    let verifier: Arc<dyn AccessCodeVerifier> = Arc::new(verifier);

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let notifier = build_notifier(config.notifications.as_ref())
        .map_err(|e| startup_error("SMTP setup", e))?;

    let portfolio_file = Arc::new(JsonFile::new(config.portfolio_file.clone()));
    let messages_file = Arc::new(JsonFile::new(config.messages_file.clone()));

    let state = build_app_state(
        Arc::clone(&portfolio_file),
        Arc::clone(&messages_file),
        notifier,
        Arc::new(AdminLoginUseCase::new(
            verifier,
            Arc::clone(&token_provider_arc),
        )),
    );
    let probe = StorageProbe {
        portfolio: portfolio_file,
        messages: messages_file,
    };
    let openapi = ApiDoc::openapi();

    let server_url = config.server_addr();
    info!(
        address = %server_url,
        portfolio = %config.portfolio_file.display(),
        messages = %config.messages_file.display(),
        "Server starting"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(probe.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin session
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_session_handler);
    cfg.service(crate::dashboard::adapter::incoming::web::routes::get_dashboard_handler);
    // Portfolio: fixed segments before `{section}`
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::replace_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::replace_hero_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_skill_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_entry_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_entry_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_entry_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}

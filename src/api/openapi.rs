use crate::api::schemas::{AckResponse, ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Admin session
use crate::auth::adapter::incoming::web::routes::{AdminLoginRequestDto, AdminSessionResponse};
use crate::auth::application::use_cases::admin_login::AdminLoginResponse;

// Portfolio
use crate::modules::portfolio::application::domain::{
    Experience, Hero, PortfolioDocument, Project, Service, ServiceIcon, Skill, Skills,
    SocialLinks, Testimonial,
};

// Contact
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactMessageRequestDto, UpdateMessageRequestDto,
};
use crate::modules::contact::application::domain::{ContactMessage, MessageStatus};

// Dashboard
use crate::modules::dashboard::application::ports::incoming::DashboardStats;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content and inbox API behind a single-owner portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::replace_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::replace_hero_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_entry_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_entry_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_entry_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_skill_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_message_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_messages_handler,
        crate::modules::contact::adapter::incoming::web::routes::update_message_handler,

        // Admin endpoints
        crate::auth::adapter::incoming::web::routes::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::admin_session_handler,
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_handler,

        // Operational
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminLoginResponse>,
            SuccessResponse<AdminSessionResponse>,
            SuccessResponse<DashboardStats>,
            SuccessResponse<PortfolioDocument>,
            AckResponse,
            ErrorResponse,
            ErrorDetail,

            // Portfolio document
            PortfolioDocument,
            Hero,
            SocialLinks,
            Project,
            Skills,
            Skill,
            Service,
            ServiceIcon,
            Experience,
            Testimonial,

            // Contact
            ContactMessage,
            ContactMessageRequestDto,
            UpdateMessageRequestDto,
            MessageStatus,

            // Admin
            AdminLoginRequestDto,
            AdminLoginResponse,
            AdminSessionResponse,
            DashboardStats,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio document and admin edits"),
        (name = "contact", description = "Contact form submissions and admin inbox"),
        (name = "admin", description = "Admin session and dashboard"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}

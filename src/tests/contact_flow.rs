//! Contact form to admin inbox, through real services and JSON files on disk.

use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth::adapter::outgoing::security::Argon2AccessCodeVerifier;
use crate::auth::application::use_cases::admin_login::AdminLoginUseCase;
use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier,
};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::storage::JsonFile;
use crate::tests::support::auth_helper::test_token_provider;
use crate::tests::support::portfolio_fixtures::sample_document;
use crate::{build_app_state, init_routes};

const ACCESS_CODE: &str = "open-sesame";

#[derive(Clone, Default)]
struct RecordingNotifier {
    subjects: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn message_received(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError> {
        self.subjects.lock().unwrap().push(message.subject.clone());
        Ok(())
    }
}

async fn seeded_dir() -> (TempDir, Arc<JsonFile>, Arc<JsonFile>) {
    let dir = TempDir::new().unwrap();
    let portfolio = Arc::new(JsonFile::new(dir.path().join("portfolio.json")));
    let messages = Arc::new(JsonFile::new(dir.path().join("messages.json")));
    portfolio.write(&sample_document(), None).await.unwrap();
    (dir, portfolio, messages)
}

macro_rules! flow_app {
    ($portfolio:expr, $messages:expr, $notifier:expr) => {{
        let token_provider = test_token_provider();
        let verifier = Argon2AccessCodeVerifier::from_plain_code(ACCESS_CODE).unwrap();
        let state = build_app_state(
            $portfolio,
            $messages,
            Arc::new($notifier),
            Arc::new(AdminLoginUseCase::new(
                Arc::new(verifier),
                Arc::clone(&token_provider),
            )),
        );
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(token_provider))
                .app_data(custom_json_config())
                .app_data(custom_query_config())
                .configure(init_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn visitor_message_reaches_admin_inbox() {
    let (dir, portfolio, messages) = seeded_dir().await;
    let notifier = RecordingNotifier::default();
    let app = flow_app!(portfolio, messages, notifier.clone());

    // Visitor submits the contact form
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Sarah",
            "email": "sarah@example.com",
            "subject": "Hi",
            "message": "Hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(*notifier.subjects.lock().unwrap(), vec!["Hi".to_string()]);
    assert!(dir.path().join("messages.json").exists());

    // Admin logs in
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "code": ACCESS_CODE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let bearer = format!("Bearer {}", body["data"]["accessToken"].as_str().unwrap());

    // Unread inbox holds Sarah's message
    let req = test::TestRequest::get()
        .uri("/api/contact?status=unread")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let inbox: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let inbox = inbox.as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["name"], "Sarah");
    assert_eq!(inbox[0]["read"], false);
    let id = inbox[0]["id"].as_str().unwrap().to_string();

    // Dashboard counts it as unread
    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let stats: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(stats["data"]["totalMessages"], 1);
    assert_eq!(stats["data"]["unreadMessages"], 1);
    assert_eq!(stats["data"]["totalProjects"], 2);

    // Mark as read, then the unread view is empty
    let req = test::TestRequest::patch()
        .uri("/api/contact")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "messageId": id, "action": "markAsRead" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/contact?status=unread")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let unread: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(unread, json!([]));

    let req = test::TestRequest::get()
        .uri("/api/contact")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let all: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(all[0]["id"], id.as_str());
    assert_eq!(all[0]["read"], true);

    // Delete removes it for good
    let req = test::TestRequest::patch()
        .uri("/api/contact")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "messageId": id, "action": "delete" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/contact")
        .insert_header(("Authorization", bearer))
        .to_request();
    let all: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(all, json!([]));
}

#[actix_web::test]
async fn invalid_submission_is_not_stored() {
    let (dir, portfolio, messages) = seeded_dir().await;
    let notifier = RecordingNotifier::default();
    let app = flow_app!(portfolio, messages, notifier.clone());

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Sarah",
            "email": "not-an-email",
            "subject": "Hi",
            "message": "Hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(notifier.subjects.lock().unwrap().is_empty());
    assert!(!dir.path().join("messages.json").exists());
}

#[actix_web::test]
async fn inbox_is_closed_without_a_session() {
    let (_dir, portfolio, messages) = seeded_dir().await;
    let app = flow_app!(portfolio, messages, RecordingNotifier::default());

    let req = test::TestRequest::get().uri("/api/contact").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn search_matches_sender_fields() {
    let (_dir, portfolio, messages) = seeded_dir().await;
    let app = flow_app!(portfolio, messages, RecordingNotifier::default());

    for (name, subject) in [("Sarah", "Collaboration"), ("Tom", "Invoice question")] {
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": name,
                "email": format!("{}@example.com", name.to_lowercase()),
                "subject": subject,
                "message": "Hello there"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let bearer = crate::tests::support::auth_helper::admin_bearer();
    let req = test::TestRequest::get()
        .uri("/api/contact?search=invoice")
        .insert_header(("Authorization", bearer))
        .to_request();
    let found: Value = test::read_body_json(test::call_service(&app, req).await).await;

    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Tom");
}

//! Integration tests for the HTTP relays against a local mock server

use assert_matches::assert_matches;
use folio_core::contact::{feedback_for, ContactForm, ToastKind};
use folio_core::preferences::{MemoryStore, PreferenceStore, VISITOR_ALERT_KEY};
use folio_core::relay::{
    ClientDetails, EmailJsRelay, EmailRelay, GeoLocator, IpApiLocator, NotifyOutcome,
    TemplateParams, VisitorNotifier,
};
use folio_core::utils::config::{GeolocationConfig, RelayConfig};
use folio_core::{FolioError, RelayError};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_PATH: &str = "/api/v1.0/email/send";

fn relay_config(server: &MockServer) -> RelayConfig {
    RelayConfig {
        endpoint: format!("{}{}", server.uri(), SEND_PATH),
        service_id: "service_test".to_string(),
        contact_template_id: "template_contact".to_string(),
        visitor_template_id: "template_visitor".to_string(),
        public_key: "pk_test".to_string(),
    }
}

fn geo_config(server: &MockServer) -> GeolocationConfig {
    GeolocationConfig {
        url: format!("{}/json/", server.uri()),
    }
}

fn desktop_client() -> ClientDetails {
    ClientDetails {
        user_agent: "folio/test".to_string(),
        platform: "linux-x86_64".to_string(),
        screen_width: 1280,
        screen_height: 800,
        referrer: Some("https://search.example.com".to_string()),
    }
}

#[tokio::test]
async fn test_relay_posts_emailjs_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({
            "service_id": "service_test",
            "template_id": "template_contact",
            "user_id": "pk_test",
            "template_params": { "user_name": "Ada" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let relay = EmailJsRelay::from_config(&relay_config(&server));
    let mut params = TemplateParams::new();
    params.insert("user_name".to_string(), "Ada".to_string());

    relay.send("template_contact", params).await.unwrap();
}

#[tokio::test]
async fn test_relay_rejection_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let relay = EmailJsRelay::from_config(&relay_config(&server));
    let result = relay.send("template_contact", TemplateParams::new()).await;

    assert_matches!(
        result,
        Err(RelayError::Rejected { status: 400, ref body }) if body.contains("user ID")
    );
}

#[tokio::test]
async fn test_unconfigured_relay_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = RelayConfig {
        public_key: String::new(),
        ..relay_config(&server)
    };
    let result = EmailJsRelay::from_config(&config)
        .send("template_contact", TemplateParams::new())
        .await;

    assert_matches!(result, Err(RelayError::NotConfigured(_)));
}

#[tokio::test]
async fn test_contact_form_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({
            "template_params": {
                "user_name": "Ada",
                "user_email": "ada@example.com",
                "message": "Let's talk"
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let relay = EmailJsRelay::from_config(&relay_config(&server));

    let mut form = ContactForm::new();
    form.name = "Ada".to_string();
    form.email = "not-an-email".to_string();
    form.message = "Let's talk".to_string();

    let result = form.submit(&relay, "template_contact").await;
    assert_matches!(result, Err(FolioError::Validation(_)));

    form.email = "ada@example.com".to_string();
    let result = form.submit(&relay, "template_contact").await;
    assert!(result.is_ok());
    assert_eq!(feedback_for(&result).map(|(kind, _)| kind), Some(ToastKind::Success));
    assert!(form.name.is_empty());
}

#[tokio::test]
async fn test_locator_parses_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.7",
            "city": "Lisbon",
            "region": "Lisbon",
            "country": "PT",
            "country_name": "Portugal",
            "org": "Example Telecom"
        })))
        .mount(&server)
        .await;

    let info = IpApiLocator::from_config(&geo_config(&server)).locate().await.unwrap();
    assert_eq!(info.city, "Lisbon");
    assert_eq!(info.country, "Portugal");
    assert_eq!(info.org, "Example Telecom");
}

#[tokio::test]
async fn test_locator_rejects_non_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let result = IpApiLocator::from_config(&geo_config(&server)).locate().await;
    assert_matches!(result, Err(RelayError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_visitor_alert_sent_once_per_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.7",
            "city": "Lisbon",
            "region": "Lisbon",
            "country_name": "Portugal",
            "org": "Example Telecom"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({
            "template_id": "template_visitor",
            "template_params": {
                "subject": "New Visitor from Lisbon, Portugal",
                "screen": "1280x800",
                "referrer": "https://search.example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(MemoryStore::new());
    let notifier = VisitorNotifier::new(
        Arc::new(IpApiLocator::from_config(&geo_config(&server))),
        Arc::new(EmailJsRelay::from_config(&relay_config(&server))),
        session.clone(),
        "template_visitor",
    );

    assert_eq!(notifier.notify_once(&desktop_client()).await, NotifyOutcome::Sent);
    assert_eq!(notifier.notify_once(&desktop_client()).await, NotifyOutcome::AlreadySent);
    assert!(session.get(VISITOR_ALERT_KEY).is_some());
}

#[tokio::test]
async fn test_visitor_alert_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = VisitorNotifier::new(
        Arc::new(IpApiLocator::from_config(&geo_config(&server))),
        Arc::new(EmailJsRelay::from_config(&relay_config(&server))),
        Arc::new(MemoryStore::new()),
        "template_visitor",
    );

    assert_matches!(
        notifier.notify_once(&desktop_client()).await,
        NotifyOutcome::Failed(_)
    );
    assert_eq!(notifier.notify_once(&desktop_client()).await, NotifyOutcome::AlreadySent);
}

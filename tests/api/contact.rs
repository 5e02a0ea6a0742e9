use comiz_site::routes::contact::{
    SEND_FAILED_MESSAGE, SENT_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE, SubmissionResult,
    VALIDATION_FAILED_MESSAGE,
};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{TestApp, spawn_app, spawn_app_unconfigured};

fn valid_body() -> serde_json::Value {
    json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "message": "I need sourcing help for electronics."
    })
}

async fn submit(app: &TestApp, body: serde_json::Value) -> SubmissionResult {
    let response = app.post_contact(body).await;
    assert_eq!(200, response.status().as_u16());
    response
        .json()
        .await
        .expect("Failed to parse the submission result.")
}

#[tokio::test]
async fn invalid_input_fails_validation_and_never_reaches_the_provider() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            json!({"fullName": "J", "email": "jane@example.com", "message": "A long enough message."}),
            "a one-character name",
        ),
        (
            json!({"fullName": "Jane Doe", "email": "not-an-email", "message": "A long enough message."}),
            "a malformed email",
        ),
        (
            json!({"fullName": "Jane Doe", "email": "jane@example.com", "message": "too short"}),
            "a nine-character message",
        ),
    ];

    for (body, description) in test_cases {
        let result = submit(&app, body).await;

        assert!(!result.success, "The API accepted {description}.");
        assert_eq!(VALIDATION_FAILED_MESSAGE, result.message);
        assert!(result.message_id.is_none());
    }
}

#[tokio::test]
async fn a_2_char_name_passes_while_a_short_message_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let result = submit(
        &app,
        json!({"fullName": "Jo", "email": "a@b.com", "message": "short"}),
    )
    .await;

    assert!(!result.success);
    let field_errors = result.field_errors.expect("No field errors returned.");
    assert_eq!(1, field_errors.len());
    assert_eq!("message", field_errors[0].field);
}

#[tokio::test]
async fn a_body_with_missing_fields_is_rejected() {
    let app = spawn_app().await;

    let test_cases = vec![
        (json!({"fullName": "Jane Doe"}), "missing email and message"),
        (json!({"email": "jane@example.com"}), "missing name and message"),
        (json!({}), "missing everything"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}.",
        );
    }
}

#[tokio::test]
async fn a_placeholder_credential_redirects_to_the_fallback_contact() {
    let app = spawn_app_unconfigured().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let result = submit(&app, valid_body()).await;

    assert!(!result.success);
    assert_eq!(SERVICE_UNAVAILABLE_MESSAGE, result.message);
    assert!(result.message.contains("comiz.global@gmail.com"));
    assert_eq!(
        Some("Email provider API key not configured".to_string()),
        result.error
    );
}

#[tokio::test]
async fn a_provider_rejection_surfaces_its_error_detail() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "mailbox unavailable"})),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = submit(&app, valid_body()).await;

    assert!(!result.success);
    assert_eq!(SEND_FAILED_MESSAGE, result.message);
    assert_eq!(Some("mailbox unavailable".to_string()), result.error);
}

#[tokio::test]
async fn an_opaque_provider_failure_gets_the_fixed_fallback_detail() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = submit(&app, valid_body()).await;

    assert!(!result.success);
    assert_eq!(Some("Unknown provider error".to_string()), result.error);
}

#[tokio::test]
async fn a_valid_submission_returns_the_provider_message_id() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc123"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = submit(&app, valid_body()).await;

    assert!(result.success);
    assert_eq!(Some("abc123".to_string()), result.message_id);
    assert_eq!(SENT_MESSAGE, result.message);
    assert!(result.message.contains("24 hours"));
}

#[tokio::test]
async fn the_documented_jane_doe_scenario_succeeds_end_to_end() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_42"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = submit(&app, valid_body()).await;

    assert!(result.success);
    assert_eq!(Some("em_42".to_string()), result.message_id);
}

#[tokio::test]
async fn provided_optional_fields_appear_in_the_dispatched_email() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_1"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut body = valid_body();
    body["country"] = json!("Germany");
    body["whatsapp"] = json!("+49 151 000000");
    submit(&app, body).await;

    let request = &app.email_server.received_requests().await.unwrap()[0];
    let payload: serde_json::Value = serde_json::from_slice(&request.body).unwrap();

    assert_eq!("CoMiz Global <no-reply@comizglobal.com>", payload["from"]);
    assert_eq!("contact@comizglobal.com", payload["to"][0]);
    assert_eq!("jane@example.com", payload["reply_to"]);
    assert_eq!(
        "New Inquiry from CoMiz Global Website - Jane Doe",
        payload["subject"]
    );

    let html = payload["html"].as_str().unwrap();
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("Germany"));
    assert!(html.contains("+49 151 000000"));
    assert!(html.contains("I need sourcing help for electronics."));
}

#[tokio::test]
async fn absent_optional_fields_leave_no_trace_in_the_dispatched_email() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_1"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    submit(&app, valid_body()).await;

    let request = &app.email_server.received_requests().await.unwrap()[0];
    let payload: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    let html = payload["html"].as_str().unwrap();

    assert!(!html.contains("Country:"));
    assert!(!html.contains("WhatsApp:"));
}

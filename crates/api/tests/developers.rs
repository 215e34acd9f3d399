//! Intake endpoint tests: drive the router in-process and assert on the
//! wire-level contract.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_developer(payload: Value) -> (StatusCode, Value) {
    let app = roster_api::app().expect("static configuration");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/developers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request construction"),
        )
        .await
        .expect("infallible service");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collection");
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body)
}

#[tokio::test]
async fn accepts_a_valid_developer() {
    let (status, body) = post_developer(json!({
        "firstName": "Al",
        "email": "al@example.com",
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "accepted"}));
}

#[tokio::test]
async fn rejects_with_ordered_field_codes() {
    let (status, body) = post_developer(json!({
        "firstName": "",
        "email": "bad",
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "errors": [
                {"field": "FirstName", "code": "required_first_name"},
                {"field": "Email", "code": "email_invalid_email"},
            ]
        })
    );
}

#[tokio::test]
async fn rejects_an_overlong_name() {
    let (status, body) = post_developer(json!({
        "firstName": "Maximiliano",
        "email": "max@example.com",
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"],
        json!([{
            "field": "FirstName",
            "code": "first_name_length_should_be_between_2_and_10",
        }])
    );
}

#[tokio::test]
async fn rejects_a_name_with_digits() {
    let (status, body) = post_developer(json!({
        "firstName": "Al3x",
        "email": "alex@example.com",
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"],
        json!([{
            "field": "FirstName",
            "code": "first_name_should_be_characters_only",
        }])
    );
}

#[tokio::test]
async fn missing_fields_fail_validation() {
    let (status, body) = post_developer(json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"],
        json!([
            {"field": "FirstName", "code": "required_first_name"},
            {"field": "Email", "code": "email_invalid_email"},
        ])
    );
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = roster_api::app().expect("static configuration");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request construction"),
        )
        .await
        .expect("infallible service");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collection");
    let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
    assert_eq!(body["status"], "ok");
}

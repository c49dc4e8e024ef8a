mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::*;
use std::sync::Arc;

#[tokio::test]
async fn recruiter_request_returns_analysis_envelope() {
    let (app, model) = app();
    let response = send(
        app,
        json_request("/summarize", r#"{"text":"Hello world","role":"recruiter"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "recruiter");
    assert!(!body["analysis"].as_str().unwrap().is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    assert!(body.get("source").is_none());
    assert!(body.get("pages").is_none());

    let prompts = model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("You are an expert recruiter."));
    assert!(prompts[0].ends_with("Document:\nHello world"));
}

#[tokio::test]
async fn every_known_role_is_echoed() {
    for role in ["developer", "recruiter", "analyst", "student"] {
        let (app, _) = app();
        let body = format!(r#"{{"text":"some document","role":"{role}"}}"#);
        let response = send(app, json_request("/summarize", &body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["role"], role);
    }
}

#[tokio::test]
async fn unknown_role_falls_back_to_developer() {
    let (app, model) = app();
    let response = send(app, json_request("/summarize", r#"{"text":"x","role":"pirate"}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "developer");
    assert!(model.prompts.lock().unwrap()[0].starts_with("You are an expert developer."));
}

#[tokio::test]
async fn missing_role_defaults_to_developer() {
    let (app, _) = app();
    let response = send(app, json_request("/summarize", r#"{"text":"x"}"#)).await;

    assert_eq!(body_json(response).await["role"], "developer");
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let (app, model) = app();
    let response = send(app, json_request("/summarize", r#"{"text":""}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Text is required"})
    );
    assert!(model.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_or_blank_text_is_rejected() {
    for body in [r#"{}"#, r#"{"role":"analyst"}"#, r#"{"text":"   \n"}"#, r#"{"text":null}"#] {
        let (app, _) = app();
        let response = send(app, json_request("/summarize", body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["error"], "Text is required");
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, model) = app();
    let response = send(app, json_request("/summarize", r#"{"text": "unterminated"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
    assert!(model.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_content_type_is_a_bad_request() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/summarize")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"text":"hi"}"#))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn oversized_json_body_is_payload_too_large() {
    let (app, model) = app();
    // axum's default body limit is 2 MiB.
    let body = format!(r#"{{"text":"{}"}}"#, "a".repeat(3 * 1024 * 1024));
    let response = send(app, json_request("/summarize", &body)).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body.get("details").is_none());
    assert!(model.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_is_a_server_error_with_details() {
    let app = app_with(Arc::new(FailingModel("Resource has been exhausted (e.g. check quota).")));
    let response = send(app, json_request("/summarize", r#"{"text":"Hello world"}"#)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Resource has been exhausted (e.g. check quota).");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn identical_requests_each_call_the_model() {
    let model = Arc::new(StubModel::default());
    for _ in 0..2 {
        let response = send(
            app_with(model.clone()),
            json_request("/summarize", r#"{"text":"same text"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(model.prompts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn every_response_names_its_request_id() {
    let (app, _) = app();
    let ok = send(app.clone(), json_request("/summarize", r#"{"text":"hi"}"#)).await;
    let first = ok.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&first).is_ok());

    let failing = app_with(Arc::new(FailingModel("upstream down")));
    let err = send(failing, json_request("/summarize", r#"{"text":"hi"}"#)).await;
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let second = err.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&second).is_ok());

    assert_ne!(first, second);
}

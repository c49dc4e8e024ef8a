#![allow(dead_code)]

use analysis_system::{AnalysisError, LanguageModel};
use api::{build_router, AppState};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};

pub use analysis_system::fixtures::pdf_with_pages;
use tower::ServiceExt;

pub const BOUNDARY: &str = "----relay-test-boundary";

/// Answers every prompt with a canned analysis and remembers what it saw.
#[derive(Default)]
pub struct StubModel {
    pub prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("1) Key Insights\n- The document greets the world.".to_string())
    }
}

pub struct FailingModel(pub &'static str);

#[async_trait]
impl LanguageModel for FailingModel {
    async fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Upstream(self.0.to_string()))
    }
}

pub fn app_with(model: Arc<dyn LanguageModel>) -> Router {
    build_router(AppState::new(model, 1024 * 1024))
}

pub fn app() -> (Router, Arc<StubModel>) {
    let model = Arc::new(StubModel::default());
    (app_with(model.clone()), model)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// One multipart part: field name, optional file name, content.
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub data: Vec<u8>,
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn file_part(data: Vec<u8>) -> Part<'static> {
    Part {
        name: "file",
        file_name: Some("document.pdf"),
        data,
    }
}

pub fn role_part(role: &str) -> Part<'static> {
    Part {
        name: "role",
        file_name: None,
        data: role.as_bytes().to_vec(),
    }
}

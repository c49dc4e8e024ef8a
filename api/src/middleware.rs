use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use analysis_system::RequestId;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::error::ErrorMessage;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layers that stamp the permissive CORS headers on every response,
/// including errors, 404s and preflight replies.
pub fn cors_headers() -> [SetResponseHeaderLayer<HeaderValue>; 3] {
    [
        SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
        SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ),
    ]
}

/// Answers any `OPTIONS` request with a bare 200 before routing.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Assigns each request a fresh [`RequestId`], exposes it to handlers as an
/// extension and to the caller as `x-request-id`, and logs the outcome under
/// it, including the message of any error response.
pub async fn log_requests(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = std::time::Instant::now();
    log::debug!("[{}] {} {}", request_id, method, path);

    let mut response = next.run(request).await;

    if let Some(ErrorMessage(message)) = response.extensions().get::<ErrorMessage>() {
        if response.status().is_server_error() {
            log::error!("[{}] ERROR: {}", request_id, message);
        } else {
            log::warn!(
                "[{}] Rejected request ({}): {}",
                request_id,
                response.status().as_u16(),
                message
            );
        }
    }
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log::info!(
        "[{}] {} {} -> {} ({} ms)",
        request_id,
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

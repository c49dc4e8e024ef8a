pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};

pub use config::Config;
pub use state::AppState;

/// Builds the full application. Layers are listed innermost first, so the
/// CORS headers wrap everything including the preflight short-circuit.
pub fn build_router(state: AppState) -> Router {
    let [allow_origin, allow_headers, allow_methods] = middleware::cors_headers();

    Router::new()
        .route("/", get(routes::index))
        .route("/summarize", post(routes::summarize))
        .route(
            "/summarize-pdf",
            post(routes::summarize_pdf).layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(from_fn(middleware::preflight))
        .layer(from_fn(middleware::log_requests))
        .layer(allow_methods)
        .layer(allow_headers)
        .layer(allow_origin)
}

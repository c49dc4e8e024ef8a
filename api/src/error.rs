use analysis_system::AnalysisError;
use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const SERVER_ERROR_DETAILS: &str = "Check server terminal for full error details";
pub const MISSING_FILE_MESSAGE: &str =
    "PDF file is required. Upload it as multipart form field \"file\".";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Body could not be read; carries the status the extractor chose,
    /// e.g. 413 for a body over the size limit.
    #[error("{message}")]
    Payload { status: StatusCode, message: String },

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ApiError {
    pub fn missing_file() -> Self {
        ApiError::BadRequest(MISSING_FILE_MESSAGE.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Payload { status, .. } => *status,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Analysis(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Payload {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(_) => ApiError::Payload {
                status: rejection.status(),
                message: rejection.body_text(),
            },
            // Syntax, data and content-type failures are all the caller's input.
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

/// Attached to error responses so the access log can report the failure
/// under the request's id.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let details = status
            .is_server_error()
            .then(|| SERVER_ERROR_DETAILS.to_string());

        let body = ErrorResponse {
            error: message.clone(),
            details,
        };
        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

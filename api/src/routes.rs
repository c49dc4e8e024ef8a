use crate::error::ApiError;
use crate::state::AppState;
use analysis_system::{AnalysisRequest, AnalysisResult, RequestId};
use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Extension, Json,
};

pub const BANNER: &str =
    "UltraMind API is Running! POST to /summarize with {text, role} or /summarize-pdf with a PDF file";

pub async fn index() -> &'static str {
    BANNER
}

pub async fn summarize(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;

    let result = state
        .analysis
        .analyze_text(request_id, request.text.as_deref(), request.role.as_deref())
        .await?;

    log::info!("[{}] Success! Analysis ready for role {}", request_id, result.role);
    Ok(Json(result))
}

/// Multipart upload: `file` holds the PDF, `role` is optional. The file is
/// buffered in memory only.
pub async fn summarize_pdf(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        log::warn!("[{}] Upload is not multipart: {}", request_id, rejection.body_text());
        ApiError::missing_file()
    })?;

    let mut file: Option<Vec<u8>> = None;
    let mut role: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                if let Some(file_name) = field.file_name() {
                    log::info!("[{}] Received upload {}", request_id, file_name);
                }
                file = Some(field.bytes().await?.to_vec());
            }
            Some("role") => role = Some(field.text().await?),
            _ => {}
        }
    }

    let bytes = file
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(ApiError::missing_file)?;

    let result = state
        .analysis
        .analyze_pdf(request_id, bytes, role.as_deref())
        .await?;

    log::info!("[{}] Success! PDF analysis ready for role {}", request_id, result.role);
    Ok(Json(result))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

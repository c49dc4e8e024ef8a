use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Text is required")]
    EmptyText,

    #[error("Could not extract text from PDF. The file may be scanned or image-only.")]
    EmptyExtraction,

    #[error("{0}")]
    Extraction(String),

    /// Failure reported by, or while talking to, the model API. The message is
    /// passed through unchanged so callers see what upstream said.
    #[error("{0}")]
    Upstream(String),
}

impl AnalysisError {
    /// True when the caller can fix the failure by resubmitting different input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::EmptyText | AnalysisError::EmptyExtraction)
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Upstream(err.to_string())
    }
}

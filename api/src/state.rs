use crate::config::Config;
use analysis_system::{AnalysisService, GeminiService, LanguageModel};
use std::sync::Arc;

/// Process-wide, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(model: Arc<dyn LanguageModel>, max_upload_bytes: usize) -> Self {
        Self {
            analysis: Arc::new(AnalysisService::new(model)),
            max_upload_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let gemini = GeminiService::new(config.api_key.clone())
            .with_model(config.model.clone())
            .with_api_base(config.api_base.clone());
        log::info!("Using Gemini model {}", gemini.model());
        Self::new(Arc::new(gemini), config.max_upload_bytes)
    }
}

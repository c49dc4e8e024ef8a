use crate::document_processor::DocumentProcessor;
use crate::error::AnalysisError;
use crate::gemini_service::LanguageModel;
use crate::models::*;
use crate::prompt_builder::PromptBuilder;
use crate::role::Role;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

/// Runs one analysis end to end: validate, (extract), prompt, call the model,
/// wrap the answer. Holds no per-request state and is shared by all handlers.
pub struct AnalysisService {
    model: Arc<dyn LanguageModel>,
    document_processor: DocumentProcessor,
    prompt_builder: PromptBuilder,
}

impl AnalysisService {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            document_processor: DocumentProcessor::new(),
            prompt_builder: PromptBuilder::new(),
        }
    }

    pub async fn analyze_text(
        &self,
        request_id: RequestId,
        text: Option<&str>,
        role: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(AnalysisError::EmptyText),
        };
        let role = Role::resolve(role);
        log::info!("[{}] Processing text request for role: {}", request_id, role);

        let analysis = self.run_model(request_id, role, text).await?;
        Ok(self.format_result(role, analysis, None))
    }

    pub async fn analyze_pdf(
        &self,
        request_id: RequestId,
        bytes: Vec<u8>,
        role: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let role = Role::resolve(role);
        log::info!("[{}] Processing PDF request for role: {}", request_id, role);

        let extracted = self.document_processor.process_pdf(request_id, bytes).await?;
        let analysis = self.run_model(request_id, role, &extracted.text).await?;
        Ok(self.format_result(role, analysis, Some(extracted.pages)))
    }

    async fn run_model(
        &self,
        request_id: RequestId,
        role: Role,
        text: &str,
    ) -> Result<String, AnalysisError> {
        let prompt = self.prompt_builder.build_prompt(role, text);
        log::info!(
            "[{}] Calling language model ({} prompt characters)",
            request_id,
            prompt.len()
        );
        let analysis = self.model.generate(&prompt).await?;
        log::info!(
            "[{}] Language model returned {} characters",
            request_id,
            analysis.len()
        );
        Ok(analysis)
    }

    /// `pdf_pages` is `Some` for PDF requests; the inner option is the page
    /// count when it could be determined.
    fn format_result(
        &self,
        role: Role,
        analysis: String,
        pdf_pages: Option<Option<u32>>,
    ) -> AnalysisResult {
        AnalysisResult {
            success: true,
            role,
            analysis,
            source: pdf_pages.map(|_| Source::Pdf),
            pages: pdf_pages.flatten(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

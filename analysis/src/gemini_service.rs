use crate::error::AnalysisError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A text-in, text-out generative model. One call is one upstream round trip.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiService {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LanguageModel for GeminiService {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        // reqwest errors embed the request URL, which carries the key.
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::from(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| AnalysisError::from(e.without_url()))?;
            return Err(AnalysisError::Upstream(upstream_error_message(
                status.as_u16(),
                &error_text,
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::from(e.without_url()))?;

        answer_text(gemini_response)
    }
}

/// Pulls the concatenated text of the first candidate out of a response.
fn answer_text(response: GeminiResponse) -> Result<String, AnalysisError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(AnalysisError::Upstream(format!(
            "Gemini blocked the prompt: {reason}"
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::Upstream("Gemini returned no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
        return Err(AnalysisError::Upstream(format!(
            "Gemini returned an empty response (finish reason: {reason})"
        )));
    }

    Ok(text)
}

fn upstream_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("Gemini API error: HTTP {status}"),
        Err(_) => format!("Gemini API error: {}", body.trim()),
    }
}

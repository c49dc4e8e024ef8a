use crate::error::AnalysisError;
use crate::models::{ExtractedPdf, RequestId};
use std::any::Any;

pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts plain text from an uploaded PDF held in memory.
    ///
    /// Parsing is CPU-bound and `pdf-extract` can panic on malformed input, so
    /// the work runs on the blocking pool and a panic comes back as
    /// [`AnalysisError::Extraction`]. A document that parses but yields only
    /// whitespace is reported as [`AnalysisError::EmptyExtraction`].
    pub async fn process_pdf(
        &self,
        request_id: RequestId,
        bytes: Vec<u8>,
    ) -> Result<ExtractedPdf, AnalysisError> {
        log::info!("[{}] Processing PDF upload ({} bytes)", request_id, bytes.len());

        let extracted = tokio::task::spawn_blocking(move || extract_pdf(&bytes))
            .await
            .map_err(|join_err| {
                if join_err.is_panic() {
                    AnalysisError::Extraction(format!(
                        "PDF parser failed: {}",
                        panic_message(join_err.into_panic())
                    ))
                } else {
                    AnalysisError::Extraction(format!("PDF parser task aborted: {join_err}"))
                }
            })??;

        log::info!(
            "[{}] Extracted {} characters from {} page(s)",
            request_id,
            extracted.text.chars().count(),
            extracted
                .pages
                .map_or_else(|| "an unknown number of".to_string(), |p| p.to_string())
        );
        Ok(extracted)
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<ExtractedPdf, AnalysisError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AnalysisError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyExtraction);
    }

    Ok(ExtractedPdf {
        text,
        pages: count_pages(bytes),
    })
}

// Page count is best-effort; a document pdf-extract could read but lopdf
// cannot reload simply reports no count.
fn count_pages(bytes: &[u8]) -> Option<u32> {
    match lopdf::Document::load_mem(bytes) {
        Ok(doc) => u32::try_from(doc.get_pages().len()).ok(),
        Err(e) => {
            log::warn!("Could not count PDF pages: {}", e);
            None
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

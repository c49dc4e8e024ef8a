pub mod analysis_service;
pub mod document_processor;
pub mod error;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
pub mod gemini_service;
pub mod models;
pub mod prompt_builder;
pub mod role;

pub use analysis_service::AnalysisService;
pub use document_processor::DocumentProcessor;
pub use error::AnalysisError;
pub use gemini_service::{GeminiService, LanguageModel};
pub use models::*;
pub use prompt_builder::PromptBuilder;
pub use role::Role;

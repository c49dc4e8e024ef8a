use crate::role::Role;

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the full prompt for one analysis call. The document text is
    /// appended verbatim; nothing is trimmed or escaped.
    pub fn build_prompt(&self, role: Role, text: &str) -> String {
        let instruction = role.instruction();
        format!(
            r#"You are an expert {role}. {instruction}.

Analyze this document and provide:
1) Key Insights (bullet points)
2) Important Entities (names, technologies, concepts)
3) Executive Summary (3-4 sentences)
4) Action Items (if applicable)

Document:
{text}"#
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

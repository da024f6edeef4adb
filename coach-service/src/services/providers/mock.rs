//! Mock provider implementation for tests and local runs.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider that echoes the prompt back as Markdown.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(ProviderResponse {
            text: format!(
                "**Mock response** ({} persona chars)\n\n> {}",
                system_instruction.chars().count(),
                prompt
            ),
            input_tokens: (prompt.len() / 4) as i32,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    fn is_configured(&self) -> bool {
        self.enabled
    }

    fn model(&self) -> &str {
        "mock"
    }
}

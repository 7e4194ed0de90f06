//! LLM-backed graph extraction for free-text prompts.

use std::sync::Arc;

use tracing::info;

use super::ExtractionError;
use super::coerce::{coerce_json, validate_graph};
use super::prompt::build_system_prompt;
use crate::graph::Graph;
use crate::llm::LlmChat;
use crate::llm::config::LlmConfig;
use crate::llm::types::{ChatOptions, Message};

/// Turns free text into a [`Graph`] via a chat-completion model.
pub struct LlmExtractor {
    llm: Arc<dyn LlmChat>,
    options: ChatOptions,
    system: String,
}

impl LlmExtractor {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>, options: ChatOptions) -> Self {
        Self { llm, options, system: build_system_prompt() }
    }

    /// Extractor with sampling options taken from the LLM config.
    #[must_use]
    pub fn from_config(llm: Arc<dyn LlmChat>, config: &LlmConfig) -> Self {
        Self::new(llm, ChatOptions { max_tokens: config.max_tokens, temperature: config.temperature, json_mode: true })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Ask the model for a graph and validate its reply.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::Provider`] when the provider call fails
    /// - [`ExtractionError::Syntax`] when no JSON object can be recovered
    /// - [`ExtractionError::Schema`] when the JSON does not match the graph schema
    pub async fn extract(&self, prompt: &str) -> Result<Graph, ExtractionError> {
        let messages = [Message::user(prompt)];
        let response = self
            .llm
            .chat(&self.system, &messages, self.options)
            .await?;

        info!(
            model = %response.model,
            finish_reason = %response.finish_reason,
            truncated = response.truncated(),
            prompt_tokens = response.prompt_tokens,
            completion_tokens = response.completion_tokens,
            "extract: LLM response"
        );

        let value = coerce_json(&response.text)?;
        validate_graph(&value)
    }
}

#[cfg(test)]
#[path = "llm_test.rs"]
mod tests;

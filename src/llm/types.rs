//! Provider-neutral chat types, the `LlmChat` seam and its error type.

use serde::{Deserialize, Serialize};

use super::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// An `LLM_*` variable is set to an unusable value.
    #[error("invalid LLM config: {0}")]
    InvalidConfig(String),

    #[error("LLM API key not set: {var} is empty or unset")]
    MissingApiKey { var: String },

    /// Connect failure, timeout, or a body that could not be read.
    #[error("LLM transport failed: {0}")]
    Transport(String),

    #[error("LLM provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered 2xx but not with a usable completion.
    #[error("LLM reply could not be decoded: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E_LLM_CONFIG",
            Self::MissingApiKey { .. } => "E_LLM_NO_API_KEY",
            Self::Transport(_) => "E_LLM_TRANSPORT",
            Self::Status { .. } => "E_LLM_STATUS",
            Self::Decode(_) => "E_LLM_DECODE",
            Self::ClientBuild(_) => "E_LLM_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

// =============================================================================
// CHAT TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}

/// Sampling knobs for one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Request `response_format: {"type": "json_object"}`.
    pub json_mode: bool,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_MAX_TOKENS, temperature: DEFAULT_TEMPERATURE, json_mode: true }
    }
}

/// First choice of a completion plus usage accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub text: String,
    pub model: String,
    /// Provider finish reason as sent (`stop`, `length`, ...); empty if absent.
    pub finish_reason: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl ChatResponse {
    /// The model stopped because it ran out of token budget.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.finish_reason == "length"
    }
}

// =============================================================================
// SEAM
// =============================================================================

/// Anything that can answer a chat request. Implemented by the HTTP client
/// and by test doubles.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// # Errors
    ///
    /// Transport, status and decode failures as [`LlmError`].
    async fn chat(&self, system: &str, messages: &[Message], options: ChatOptions) -> Result<ChatResponse, LlmError>;

    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

//! Client for OpenAI-compatible `POST {base_url}/chat/completions`.
//!
//! Works against Groq, `OpenAI` and local gateways alike. Only the first
//! choice is read. Decoding is split out into [`decode_reply`] so it can be
//! tested without a server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{ChatOptions, ChatResponse, LlmChat, LlmError, Message};

pub struct ChatCompletionsClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsClient {
    /// # Errors
    ///
    /// [`LlmError::ClientBuild`] if reqwest rejects the timeout settings or
    /// cannot initialise TLS.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    async fn post(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::Transport(e.to_string()))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(LlmError::Status { status: status.as_u16(), body })
        }
    }
}

#[async_trait::async_trait]
impl LlmChat for ChatCompletionsClient {
    async fn chat(&self, system: &str, messages: &[Message], options: ChatOptions) -> Result<ChatResponse, LlmError> {
        let request = CompletionRequest {
            model: &self.model,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            response_format: options.json_mode.then_some(ResponseFormat::JSON_OBJECT),
            messages: wire_messages(system, messages),
        };
        let body = self.post(&request).await?;
        decode_reply(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl ResponseFormat {
    const JSON_OBJECT: Self = Self { kind: "json_object" };
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// System instruction first (skipped when blank), then the conversation.
fn wire_messages<'a>(system: &'a str, messages: &'a [Message]) -> Vec<WireMessage<'a>> {
    let system = (!system.trim().is_empty()).then_some(WireMessage { role: "system", content: system });
    system
        .into_iter()
        .chain(messages.iter().map(|m| WireMessage { role: &m.role, content: &m.content }))
        .collect()
}

// =============================================================================
// REPLY
// =============================================================================

#[derive(Deserialize)]
struct CompletionReply {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

/// Decode a 2xx body into the first choice's text and usage.
pub(crate) fn decode_reply(body: &str) -> Result<ChatResponse, LlmError> {
    let reply: CompletionReply = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;
    let Some(choice) = reply.choices.into_iter().next() else {
        return Err(LlmError::Decode("reply has no choices".into()));
    };
    let Some(text) = choice.message.and_then(|m| m.content) else {
        return Err(LlmError::Decode("first choice has no message content".into()));
    };
    let (prompt_tokens, completion_tokens) =
        reply.usage.map_or((0, 0), |u| (u.prompt_tokens, u.completion_tokens));

    Ok(ChatResponse {
        text,
        model: reply.model.unwrap_or_default(),
        finish_reason: choice.finish_reason.unwrap_or_default(),
        prompt_tokens,
        completion_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;

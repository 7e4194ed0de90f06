//! Chat-completion access for the extraction fallback.
//!
//! [`LlmConfig`](config::LlmConfig) is read once at startup; the resulting
//! [`ChatCompletionsClient`] is shared behind the [`LlmChat`] trait so the
//! extraction code never sees the transport.

pub mod config;
pub mod openai;
pub mod types;

pub use openai::ChatCompletionsClient;
pub use types::LlmChat;

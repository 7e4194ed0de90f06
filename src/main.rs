mod config;
mod error;
mod extract;
mod graph;
mod llm;
mod render;
mod routes;
mod state;

use std::sync::Arc;

use crate::error::ErrorCode;
use crate::extract::LlmExtractor;
use crate::llm::ChatCompletionsClient;
use crate::llm::config::LlmConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    let llm = LlmConfig::from_env().and_then(|cfg| Ok((ChatCompletionsClient::from_config(&cfg)?, cfg)));
    let extractor = match llm {
        Ok((client, cfg)) => {
            let extractor = LlmExtractor::from_config(Arc::new(client), &cfg);
            tracing::info!(model = extractor.model(), base_url = %cfg.base_url, "LLM fallback enabled");
            Some(Arc::new(extractor))
        }
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "LLM fallback disabled");
            None
        }
    };

    let state = state::AppState::new(extractor);
    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, cors_origins = ?config.cors_origins, "text2diagram listening");
    axum::serve(listener, app).await.expect("server failed");
}

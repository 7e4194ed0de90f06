//! `POST /generate`: prompt in, diagram source out.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::extract;
use crate::graph::Graph;
use crate::render::{DiagramKind, Direction, Renderer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub diagram: DiagramKind,
    #[serde(default = "default_renderer")]
    pub renderer: String,
    /// `null` and absent both mean the default direction.
    #[serde(default)]
    pub direction: Option<Direction>,
}

fn default_renderer() -> String {
    Renderer::Mermaid.name().to_owned()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub code: String,
    pub markdown: String,
    pub graph: Graph,
}

/// Validate the renderer, extract a graph, then render it.
///
/// # Errors
///
/// `UnknownRenderer` before any extraction work; `NoNodesRecognized` when
/// both extraction paths come up empty.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let renderer: Renderer = req.renderer.parse()?;

    let graph = extract::graph_from_prompt(&req.prompt, state.extractor.as_deref()).await;
    if graph.nodes.is_empty() {
        return Err(ApiError::NoNodesRecognized);
    }

    let code = renderer.render(&graph, req.diagram, req.direction.unwrap_or_default());
    info!(
        renderer = renderer.name(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        bytes = code.len(),
        "diagram rendered"
    );
    let markdown = renderer.markdown(&code);
    Ok(Json(GenerateResponse { code, markdown, graph }))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;

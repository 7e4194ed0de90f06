//! Extraction: prompt text to [`Graph`].
//!
//! DESIGN
//! ======
//! Two stages with explicit outcomes. The mini-DSL parser runs first and
//! yields a [`DslResult`]; only an insufficient result consults the LLM, whose
//! [`ExtractionResult`] is folded back by [`first_usable`]. A usable LLM graph
//! wins, anything else degrades to the DSL graph. [`graph_from_prompt`]
//! therefore never fails; the worst case is an empty graph, which the request
//! boundary turns into a user-facing error.

pub mod coerce;
pub mod dsl;
pub mod llm;
pub mod prompt;

use tracing::{debug, info, warn};

use crate::error::ErrorCode;
use crate::graph::Graph;
use crate::llm::types::LlmError;
pub use llm::LlmExtractor;

// =============================================================================
// TYPES
// =============================================================================

/// Failure of the LLM extraction path. Always absorbed by the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// Provider unreachable, timed out, non-success status or bad envelope.
    #[error("LLM provider error: {0}")]
    Provider(#[from] LlmError),

    /// No JSON object could be recovered from the reply.
    #[error("{0}")]
    Syntax(String),

    /// The JSON did not match the graph schema; one entry per violated field.
    #[error("schema mismatch: {}", .0.join("; "))]
    Schema(Vec<String>),
}

impl ErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Provider(_) => "E_LLM_PROVIDER",
            Self::Syntax(_) => "E_NON_JSON",
            Self::Schema(_) => "E_SCHEMA_MISMATCH",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Provider(e) if e.retryable())
    }
}

pub type ExtractionResult = Result<Graph, ExtractionError>;

/// Outcome of the mini-DSL stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DslResult {
    /// The author clearly used the DSL; take this graph as final.
    Sufficient(Graph),
    /// Not enough structure; the graph is kept as the degrade target.
    Insufficient(Graph),
}

impl DslResult {
    /// Parse `prompt` and judge the result.
    ///
    /// Sufficient means at least one node and either at least one edge or an
    /// `EDGES:` token anywhere in the prompt.
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        let graph = dsl::parse(prompt);
        if !graph.nodes.is_empty() && (!graph.edges.is_empty() || dsl::has_edges_token(prompt)) {
            Self::Sufficient(graph)
        } else {
            Self::Insufficient(graph)
        }
    }
}

// =============================================================================
// ORCHESTRATION
// =============================================================================

/// Build a graph from prompt text: mini-DSL first, LLM fallback second.
///
/// `extractor` is `None` when no LLM is configured; the DSL graph is then
/// returned as-is.
pub async fn graph_from_prompt(prompt: &str, extractor: Option<&LlmExtractor>) -> Graph {
    let fallback = match DslResult::from_prompt(prompt) {
        DslResult::Sufficient(graph) => {
            info!(nodes = graph.nodes.len(), edges = graph.edges.len(), "extract: mini-DSL accepted");
            return graph;
        }
        DslResult::Insufficient(graph) => graph,
    };

    let Some(extractor) = extractor else {
        debug!(nodes = fallback.nodes.len(), "extract: LLM fallback disabled");
        return fallback;
    };

    debug!(model = extractor.model(), prompt_len = prompt.len(), "extract: falling back to LLM");
    first_usable(extractor.extract(prompt).await, fallback)
}

/// Take the LLM graph when it has at least one node, otherwise degrade to `fallback`.
#[must_use]
pub fn first_usable(result: ExtractionResult, fallback: Graph) -> Graph {
    match result {
        Ok(graph) if !graph.nodes.is_empty() => {
            info!(nodes = graph.nodes.len(), edges = graph.edges.len(), "extract: LLM graph accepted");
            graph
        }
        Ok(_) => {
            info!("extract: LLM returned no nodes; keeping mini-DSL result");
            fallback
        }
        Err(e) => {
            warn!(error = %e, code = e.error_code(), retryable = e.retryable(), "extract: LLM extraction failed; keeping mini-DSL result");
            fallback
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

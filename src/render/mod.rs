//! Renderers: pure `Graph` to diagram-source functions.
//!
//! DESIGN
//! ======
//! One module per target notation. Every renderer is total: dangling edge
//! endpoints, duplicate ids and empty graphs all produce well-formed (if odd
//! looking) output, never an error. Rendering the same input twice yields
//! byte-identical text.

pub mod dot;
pub mod excalidraw;
mod ids;
pub mod mermaid;
pub mod plantuml;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::graph::Graph;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Which diagram family to emit. Only Mermaid distinguishes the two today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    #[default]
    Flow,
    Er,
}

/// Layout axis for notations that support one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TD")]
    TopDown,
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "BT")]
    BottomUp,
    #[serde(rename = "RL")]
    RightLeft,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopDown => "TD",
            Self::LeftRight => "LR",
            Self::BottomUp => "BT",
            Self::RightLeft => "RL",
        }
    }
}

// =============================================================================
// RENDERER
// =============================================================================

/// Supported output notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Mermaid,
    Dot,
    PlantUml,
    Excalidraw,
}

impl FromStr for Renderer {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mermaid" => Ok(Self::Mermaid),
            "dot" => Ok(Self::Dot),
            "plantuml" => Ok(Self::PlantUml),
            "excalidraw" => Ok(Self::Excalidraw),
            other => Err(ApiError::UnknownRenderer(other.to_owned())),
        }
    }
}

impl Renderer {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::Dot => "dot",
            Self::PlantUml => "plantuml",
            Self::Excalidraw => "excalidraw",
        }
    }

    /// Language tag for the fenced markdown block wrapping the output.
    #[must_use]
    pub fn fence(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::Dot => "dot",
            Self::PlantUml => "plantuml",
            Self::Excalidraw => "json",
        }
    }

    #[must_use]
    pub fn render(self, graph: &Graph, kind: DiagramKind, direction: Direction) -> String {
        match self {
            Self::Mermaid => mermaid::render(graph, kind, direction),
            Self::Dot => dot::render(graph, kind, direction),
            Self::PlantUml => plantuml::render(graph, kind),
            Self::Excalidraw => excalidraw::render(graph, kind),
        }
    }

    /// `code` wrapped in a fenced markdown block.
    #[must_use]
    pub fn markdown(self, code: &str) -> String {
        format!("```{}\n{code}\n```", self.fence())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

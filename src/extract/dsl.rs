//! Mini-DSL parser: `NODES: id(label) ... EDGES: a -> b : label; ...`.
//!
//! Pattern based and total. Text that does not match simply contributes
//! nothing, so the worst case is an empty graph.

use std::sync::OnceLock;

use regex::Regex;

use crate::graph::{Edge, Graph, Node};

/// `NODES:` up to the next `EDGES:` or end of text, case-insensitive.
fn nodes_section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)NODES:(.*?)(?:EDGES:|$)").expect("nodes section regex"))
}

/// `EDGES:` to end of text, case-insensitive.
fn edges_section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)EDGES:(.*)$").expect("edges section regex"))
}

fn node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z0-9_]+)\(([^)]*)\)").expect("node regex"))
}

fn edge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+)\s*->\s*([A-Za-z0-9_]+)\s*:\s*([^;\n]+)").expect("edge regex")
    })
}

/// Parse the mini-DSL out of `text`. Never fails; no match yields an empty graph.
#[must_use]
pub fn parse(text: &str) -> Graph {
    let nodes = nodes_section_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|section| {
            node_re()
                .captures_iter(section.as_str())
                .map(|c| Node::new(c[1].trim()).with_label(c[2].trim()))
                .collect()
        })
        .unwrap_or_default();

    let edges = edges_section_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|section| {
            edge_re()
                .captures_iter(section.as_str())
                .map(|c| Edge::new(c[1].trim(), c[2].trim()).with_label(c[3].trim()))
                .collect()
        })
        .unwrap_or_default();

    Graph::new(nodes, edges)
}

/// Whether the text contains an `EDGES:` token (case-insensitive), i.e. the
/// author attempted to supply edges even if none parsed.
#[must_use]
pub fn has_edges_token(text: &str) -> bool {
    edges_section_re().is_match(text)
}

#[cfg(test)]
#[path = "dsl_test.rs"]
mod tests;

//! Graphviz DOT output.

use std::borrow::Cow;
use std::fmt::Write;

use super::{DiagramKind, Direction};
use crate::graph::Graph;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Graphviz has no `TD`; top-down is `TB`.
fn rankdir(direction: Direction) -> &'static str {
    match direction {
        Direction::TopDown => "TB",
        Direction::LeftRight => "LR",
        Direction::BottomUp => "BT",
        Direction::RightLeft => "RL",
    }
}

#[must_use]
pub fn render(graph: &Graph, _kind: DiagramKind, direction: Direction) -> String {
    let mut out = format!("digraph G {{\n  rankdir={};\n  node [shape=box];", rankdir(direction));
    for node in &graph.nodes {
        let _ = write!(out, "\n  {} [label=\"{}\"];", dot_id(&node.id), escape(node.display_label()));
    }
    for edge in &graph.edges {
        let _ = write!(out, "\n  {} -> {}", dot_id(&edge.source), dot_id(&edge.target));
        if let Some(label) = edge.non_empty_label() {
            let _ = write!(out, " [label=\"{}\"]", escape(label));
        }
        out.push(';');
    }
    out.push_str("\n}");
    out
}

/// Bare identifiers and numerals pass through; anything else is quoted.
fn dot_id(id: &str) -> Cow<'_, str> {
    if is_bare_id(id) || is_numeral(id) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("\"{}\"", escape(id)))
    }
}

fn is_bare_id(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

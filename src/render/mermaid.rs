//! Mermaid `flowchart` and `erDiagram` output.

use std::collections::HashSet;
use std::fmt::Write;

use super::ids::IdAliases;
use super::{DiagramKind, Direction};
use crate::graph::Graph;

const INDENT: &str = "    ";

#[must_use]
pub fn render(graph: &Graph, kind: DiagramKind, direction: Direction) -> String {
    match kind {
        DiagramKind::Flow => flowchart(graph, direction),
        DiagramKind::Er => er_diagram(graph),
    }
}

fn flowchart(graph: &Graph, direction: Direction) -> String {
    let ids = IdAliases::new(graph);
    let mut out = format!("flowchart {}", direction.as_str());
    for node in &graph.nodes {
        let _ = write!(out, "\n{INDENT}{}[\"{}\"]", ids.get(&node.id), escape(node.display_label()));
    }
    for (id, alias) in ids.undeclared() {
        let _ = write!(out, "\n{INDENT}{alias}[\"{}\"]", escape(id));
    }
    for edge in &graph.edges {
        let (source, target) = (ids.get(&edge.source), ids.get(&edge.target));
        match edge.non_empty_label() {
            Some(label) => {
                let _ = write!(out, "\n{INDENT}{source} -->|\"{}\"| {target}", escape(label));
            }
            None => {
                let _ = write!(out, "\n{INDENT}{source} --> {target}");
            }
        }
    }
    out
}

/// Entities are declared once per id; every edge is a one-to-many relation.
fn er_diagram(graph: &Graph) -> String {
    let ids = IdAliases::new(graph);
    let mut out = String::from("erDiagram");
    let mut seen = HashSet::new();
    for node in &graph.nodes {
        if seen.insert(node.id.as_str()) {
            let _ = write!(out, "\n{INDENT}{} {{ }}", ids.get(&node.id));
        }
    }
    for edge in &graph.edges {
        let caption = edge
            .non_empty_label()
            .or_else(|| edge.kind.as_deref().filter(|k| !k.is_empty()))
            .unwrap_or("");
        let _ = write!(
            out,
            "\n{INDENT}{} ||--o{{ {} : \"{}\"",
            ids.get(&edge.source),
            ids.get(&edge.target),
            escape(caption)
        );
    }
    out
}

/// Mermaid has no backslash escapes inside quoted text; use its entity codes.
fn escape(text: &str) -> String {
    text.replace('"', "#quot;").replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn sample() -> Graph {
        Graph::new(
            vec![Node::new("user").with_label("User"), Node::new("api").with_label("API Server")],
            vec![Edge::new("user", "api").with_label("logs in"), Edge::new("api", "user")],
        )
    }

    #[test]
    fn flowchart_lists_nodes_then_edges() {
        let out = render(&sample(), DiagramKind::Flow, Direction::TopDown);
        assert_eq!(
            out,
            "flowchart TD\n    user[\"User\"]\n    api[\"API Server\"]\n    user -->|\"logs in\"| api\n    api --> user"
        );
    }

    #[test]
    fn flowchart_uses_direction() {
        let out = render(&sample(), DiagramKind::Flow, Direction::RightLeft);
        assert!(out.starts_with("flowchart RL\n"));
    }

    #[test]
    fn flowchart_falls_back_to_id_for_label() {
        let graph = Graph::new(vec![Node::new("db")], vec![]);
        assert_eq!(render(&graph, DiagramKind::Flow, Direction::LeftRight), "flowchart LR\n    db[\"db\"]");
    }

    #[test]
    fn flowchart_escapes_quotes_and_newlines() {
        let graph = Graph::new(
            vec![Node::new("q").with_label("say \"hi\"\nnow")],
            vec![Edge::new("q", "q").with_label("\"loop\"")],
        );
        let out = render(&graph, DiagramKind::Flow, Direction::TopDown);
        assert!(out.contains("q[\"say #quot;hi#quot;<br/>now\"]"));
        assert!(out.contains("q -->|\"#quot;loop#quot;\"| q"));
    }

    #[test]
    fn er_declares_each_entity_once() {
        let graph = Graph::new(
            vec![Node::new("order"), Node::new("product"), Node::new("order")],
            vec![Edge::new("order", "product").with_label("contains")],
        );
        let out = render(&graph, DiagramKind::Er, Direction::TopDown);
        assert_eq!(out, "erDiagram\n    order { }\n    product { }\n    order ||--o{ product : \"contains\"");
    }

    #[test]
    fn er_caption_falls_back_to_kind_then_empty() {
        let graph = Graph::new(
            vec![],
            vec![
                Edge { kind: Some("owns".into()), ..Edge::new("a", "b") },
                Edge { kind: Some("has".into()), ..Edge::new("a", "c").with_label("") },
                Edge::new("b", "c"),
            ],
        );
        let out = render(&graph, DiagramKind::Er, Direction::TopDown);
        assert!(out.contains("a ||--o{ b : \"owns\""));
        assert!(out.contains("a ||--o{ c : \"has\""));
        assert!(out.contains("b ||--o{ c : \"\""));
    }

    #[test]
    fn end_keyword_is_aliased_everywhere() {
        let graph = Graph::new(
            vec![Node::new("start").with_label("Start"), Node::new("end").with_label("End")],
            vec![Edge::new("start", "end").with_label("go")],
        );
        assert_eq!(
            render(&graph, DiagramKind::Flow, Direction::TopDown),
            "flowchart TD\n    start[\"Start\"]\n    end_[\"End\"]\n    start -->|\"go\"| end_"
        );
        assert_eq!(
            render(&graph, DiagramKind::Er, Direction::TopDown),
            "erDiagram\n    start { }\n    end_ { }\n    start ||--o{ end_ : \"go\""
        );
    }

    #[test]
    fn ids_with_spaces_are_aliased() {
        let graph = Graph::new(
            vec![Node::new("api gateway").with_label("API"), Node::new("db")],
            vec![Edge::new("api gateway", "db")],
        );
        let out = render(&graph, DiagramKind::Flow, Direction::LeftRight);
        assert_eq!(out, "flowchart LR\n    api_gateway[\"API\"]\n    db[\"db\"]\n    api_gateway --> db");
    }

    #[test]
    fn aliased_dangling_endpoint_keeps_its_id_as_label() {
        let graph = Graph::new(vec![Node::new("web")], vec![Edge::new("web", "cache layer")]);
        let out = render(&graph, DiagramKind::Flow, Direction::TopDown);
        assert_eq!(out, "flowchart TD\n    web[\"web\"]\n    cache_layer[\"cache layer\"]\n    web --> cache_layer");
    }
}

//! PlantUML output: one rectangle per node, one arrow per edge.

use std::fmt::Write;

use super::DiagramKind;
use super::ids::IdAliases;
use crate::graph::Graph;

#[must_use]
pub fn render(graph: &Graph, _kind: DiagramKind) -> String {
    let mut out =
        String::from("@startuml\nskinparam shadowing false\nskinparam rectangleBorderRoundCorner 12");
    let ids = IdAliases::new(graph);
    for node in &graph.nodes {
        let _ = write!(out, "\nrectangle \"{}\" as {}", escape(node.display_label()), ids.get(&node.id));
    }
    for (id, alias) in ids.undeclared() {
        let _ = write!(out, "\nrectangle \"{}\" as {alias}", escape(id));
    }
    for edge in &graph.edges {
        let _ = write!(out, "\n{} --> {}", ids.get(&edge.source), ids.get(&edge.target));
        if let Some(label) = edge.non_empty_label() {
            let _ = write!(out, " : {}", escape(label));
        }
    }
    out.push_str("\n@enduml");
    out
}

/// PlantUML reads `\n` as a line break and creole char refs inside labels.
fn escape(text: &str) -> String {
    text.replace('"', "&#34;").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    #[test]
    fn wraps_body_in_start_and_end_markers() {
        let graph = Graph::new(
            vec![Node::new("user").with_label("User"), Node::new("api")],
            vec![Edge::new("user", "api").with_label("calls"), Edge::new("api", "user")],
        );
        assert_eq!(
            render(&graph, DiagramKind::Flow),
            "@startuml\nskinparam shadowing false\nskinparam rectangleBorderRoundCorner 12\n\
             rectangle \"User\" as user\nrectangle \"api\" as api\n\
             user --> api : calls\napi --> user\n@enduml"
        );
    }

    #[test]
    fn empty_graph_is_just_the_frame() {
        let out = render(&Graph::default(), DiagramKind::Er);
        assert!(out.starts_with("@startuml\n"));
        assert!(out.ends_with("\n@enduml"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn escapes_quotes_in_labels() {
        let graph = Graph::new(vec![Node::new("q").with_label("the \"best\"\nnode")], vec![]);
        let out = render(&graph, DiagramKind::Flow);
        assert!(out.contains("rectangle \"the &#34;best&#34;\\nnode\" as q"));
    }

    #[test]
    fn ids_with_spaces_are_aliased() {
        let graph = Graph::new(
            vec![Node::new("api gateway").with_label("API"), Node::new("db")],
            vec![Edge::new("api gateway", "db"), Edge::new("db", "read replica")],
        );
        let out = render(&graph, DiagramKind::Flow);
        assert!(out.contains("\nrectangle \"API\" as api_gateway\n"));
        assert!(out.contains("\nrectangle \"read replica\" as read_replica\n"));
        assert!(out.contains("\napi_gateway --> db\n"));
        assert!(out.contains("\ndb --> read_replica\n"));
    }

    #[test]
    fn end_id_is_aliased() {
        let graph = Graph::new(vec![Node::new("end").with_label("End")], vec![Edge::new("start", "end")]);
        let out = render(&graph, DiagramKind::Flow);
        assert!(out.contains("\nrectangle \"End\" as end_\n"));
        assert!(out.contains("\nstart --> end_\n"));
    }
}

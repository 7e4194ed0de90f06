use super::*;

#[test]
fn parses_basic_nodes_and_edge() {
    let graph = parse("NODES: a(A) b(B) EDGES: a -> b : rel");
    assert_eq!(graph.nodes, vec![Node::new("a").with_label("A"), Node::new("b").with_label("B")]);
    assert_eq!(graph.edges, vec![Edge::new("a", "b").with_label("rel")]);
}

#[test]
fn parses_scenario_prompt() {
    let graph = parse("NODES: User(User) API(API Server) EDGES: User -> API : logs in");
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[1].id, "API");
    assert_eq!(graph.nodes[1].label.as_deref(), Some("API Server"));
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].label.as_deref(), Some("logs in"));
}

#[test]
fn tokens_are_case_insensitive() {
    let graph = parse("nodes: x(X) y(Y)\nedges: x -> y : uses");
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn trims_labels_and_keeps_inner_spaces() {
    let graph = parse("NODES: db(  Orders DB  )");
    assert_eq!(graph.nodes[0].label.as_deref(), Some("Orders DB"));
}

#[test]
fn edges_terminate_on_semicolon_and_newline() {
    let text = "NODES: a(A) b(B) c(C)\nEDGES: a->b:calls; b -> c : writes to\nc->a :  notifies  ";
    let graph = parse(text);
    let edges: Vec<(&str, &str, Option<&str>)> = graph
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str(), e.label.as_deref()))
        .collect();
    assert_eq!(
        edges,
        vec![("a", "b", Some("calls")), ("b", "c", Some("writes to")), ("c", "a", Some("notifies"))]
    );
}

#[test]
fn preserves_match_order() {
    let graph = parse("NODES: z(Z) a(A) m(M)");
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn nodes_section_without_pairs_yields_no_nodes() {
    let graph = parse("NODES: just some words here, nothing parenthesised");
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn free_text_yields_empty_graph() {
    let graph = parse("User logs in to the API which reads from the database");
    assert_eq!(graph, Graph::default());
}

#[test]
fn node_patterns_after_edges_token_are_not_nodes() {
    let graph = parse("NODES: a(A) EDGES: a -> b : x f(not a node)");
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.edges[0].label.as_deref(), Some("x f(not a node)"));
}

#[test]
fn edges_without_nodes_section_still_parse() {
    let graph = parse("EDGES: a -> b : calls");
    assert!(graph.nodes.is_empty());
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn edge_without_label_separator_is_ignored() {
    let graph = parse("NODES: a(A) b(B) EDGES: a -> b");
    assert!(graph.edges.is_empty());
}

#[test]
fn empty_parentheses_give_empty_label() {
    let graph = parse("NODES: a()");
    assert_eq!(graph.nodes, vec![Node::new("a").with_label("")]);
}

#[test]
fn detects_edges_token_case_insensitively() {
    assert!(has_edges_token("NODES: a(A) edges:"));
    assert!(has_edges_token("EDGES:"));
    assert!(!has_edges_token("NODES: a(A) edges"));
}

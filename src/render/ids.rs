//! Safe node identifiers for notations that take ids as bare words.
//!
//! Mermaid and PlantUML both read an id up to the first space or symbol, and
//! Mermaid treats `end` as a block terminator. Ids that are plain words pass
//! through; every other id gets a stable alias that is unique within the
//! graph.

use std::collections::{HashMap, HashSet};

use crate::graph::Graph;

const RESERVED: [&str; 1] = ["end"];

/// Per-graph id to alias table. Only ids that need an alias are stored.
pub struct IdAliases<'a> {
    aliases: HashMap<&'a str, String>,
    node_ids: HashSet<&'a str>,
    /// Edge endpoints in first-seen order, deduplicated.
    endpoints: Vec<&'a str>,
}

impl<'a> IdAliases<'a> {
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut endpoints = Vec::new();
        let mut seen_endpoints = HashSet::new();
        for edge in &graph.edges {
            for id in [edge.source.as_str(), edge.target.as_str()] {
                if seen_endpoints.insert(id) {
                    endpoints.push(id);
                }
            }
        }

        let ordered: Vec<&str> =
            graph.nodes.iter().map(|n| n.id.as_str()).chain(endpoints.iter().copied()).collect();
        let mut taken: HashSet<String> =
            ordered.iter().filter(|id| is_bare(id)).map(|id| (*id).to_owned()).collect();
        let mut aliases = HashMap::new();
        for id in ordered {
            if is_bare(id) || aliases.contains_key(id) {
                continue;
            }
            let base = base_alias(id);
            let mut candidate = base.clone();
            let mut n = 2;
            while taken.contains(&candidate) {
                candidate = format!("{base}_{n}");
                n += 1;
            }
            taken.insert(candidate.clone());
            aliases.insert(id, candidate);
        }

        Self { aliases, node_ids, endpoints }
    }

    /// The identifier to emit for `id`.
    #[must_use]
    pub fn get<'s>(&'s self, id: &'s str) -> &'s str {
        self.aliases.get(id).map_or(id, String::as_str)
    }

    /// Aliased edge endpoints without a node of their own. These need an
    /// explicit declaration or the original id never shows up in the output.
    #[must_use]
    pub fn undeclared(&self) -> Vec<(&'a str, &str)> {
        self.endpoints
            .iter()
            .filter(|id| !self.node_ids.contains(*id))
            .filter_map(|id| self.aliases.get(id).map(|alias| (*id, alias.as_str())))
            .collect()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, excluding reserved words in any case.
fn is_bare(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.iter().any(|r| r.eq_ignore_ascii_case(id))
}

fn base_alias(id: &str) -> String {
    let mut alias: String = id.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();
    if alias.is_empty() || alias.starts_with(|c: char| c.is_ascii_digit()) {
        alias.insert_str(0, "n_");
    }
    if RESERVED.iter().any(|r| r.eq_ignore_ascii_case(&alias)) {
        alias.push('_');
    }
    alias
}

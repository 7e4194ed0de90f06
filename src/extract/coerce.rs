//! JSON coercion and strict schema validation of LLM replies.
//!
//! Two phases: [`coerce_json`] recovers a generic JSON value from free text
//! (possibly wrapped in prose or code fences), then [`validate_graph`] checks
//! that value field by field against the graph schema, reporting every
//! violation at once.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::ExtractionError;
use crate::graph::{Edge, Graph, Node};

// =============================================================================
// PHASE 1: SYNTAX
// =============================================================================

/// Recover a JSON value from an LLM reply.
///
/// Tries the trimmed text as-is, then the span from the first `{` to the last
/// `}` inclusive.
///
/// # Errors
///
/// Returns [`ExtractionError::Syntax`] when neither attempt parses.
pub fn coerce_json(text: &str) -> Result<Value, ExtractionError> {
    let text = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(ExtractionError::Syntax("non-JSON content".into()));
    };
    if end <= start {
        return Err(ExtractionError::Syntax("non-JSON content".into()));
    }
    serde_json::from_str::<Value>(&text[start..=end])
        .map_err(|e| ExtractionError::Syntax(format!("non-JSON content: {e}")))
}

// =============================================================================
// PHASE 2: SCHEMA
// =============================================================================

/// Validate a generic JSON value as a [`Graph`].
///
/// Unknown keys are ignored. Optional fields accept `null` or absence.
///
/// # Errors
///
/// Returns [`ExtractionError::Schema`] listing every violated field.
pub fn validate_graph(value: &Value) -> Result<Graph, ExtractionError> {
    let Some(root) = value.as_object() else {
        return Err(ExtractionError::Schema(vec![format!("$: expected object, found {}", type_name(value))]));
    };

    let mut violations = Vec::new();
    let nodes = required_array(root, "nodes", &mut violations)
        .iter()
        .enumerate()
        .filter_map(|(i, item)| validate_node(item, &format!("nodes[{i}]"), &mut violations))
        .collect();
    let edges = required_array(root, "edges", &mut violations)
        .iter()
        .enumerate()
        .filter_map(|(i, item)| validate_edge(item, &format!("edges[{i}]"), &mut violations))
        .collect();

    if violations.is_empty() { Ok(Graph::new(nodes, edges)) } else { Err(ExtractionError::Schema(violations)) }
}

fn validate_node(value: &Value, path: &str, violations: &mut Vec<String>) -> Option<Node> {
    let Some(obj) = value.as_object() else {
        violations.push(format!("{path}: expected object, found {}", type_name(value)));
        return None;
    };
    let id = required_string(obj, "id", path, violations);
    let label = optional_string(obj, "label", path, violations);
    let kind = optional_string(obj, "kind", path, violations);
    let props = optional_props(obj, path, violations);
    Some(Node { id: id?, label, kind, props })
}

fn validate_edge(value: &Value, path: &str, violations: &mut Vec<String>) -> Option<Edge> {
    let Some(obj) = value.as_object() else {
        violations.push(format!("{path}: expected object, found {}", type_name(value)));
        return None;
    };
    let source = required_string(obj, "source", path, violations);
    let target = required_string(obj, "target", path, violations);
    let label = optional_string(obj, "label", path, violations);
    let kind = optional_string(obj, "kind", path, violations);
    Some(Edge { source: source?, target: target?, label, kind })
}

fn required_array<'a>(obj: &'a Map<String, Value>, key: &str, violations: &mut Vec<String>) -> &'a [Value] {
    match obj.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            violations.push(format!("{key}: expected array, found {}", type_name(other)));
            &[]
        }
        None => {
            violations.push(format!("{key}: missing required field"));
            &[]
        }
    }
}

fn required_string(obj: &Map<String, Value>, key: &str, path: &str, violations: &mut Vec<String>) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(format!("{path}.{key}: must not be empty"));
            None
        }
        Some(other) => {
            violations.push(format!("{path}.{key}: expected string, found {}", type_name(other)));
            None
        }
        None => {
            violations.push(format!("{path}.{key}: missing required field"));
            None
        }
    }
}

fn optional_string(obj: &Map<String, Value>, key: &str, path: &str, violations: &mut Vec<String>) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(format!("{path}.{key}: expected string or null, found {}", type_name(other)));
            None
        }
    }
}

fn optional_props(
    obj: &Map<String, Value>,
    path: &str,
    violations: &mut Vec<String>,
) -> Option<BTreeMap<String, String>> {
    match obj.get("props") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => {
            let mut props = BTreeMap::new();
            for (k, v) in map {
                match v {
                    Value::String(s) => {
                        props.insert(k.clone(), s.clone());
                    }
                    other => {
                        violations.push(format!("{path}.props.{k}: expected string, found {}", type_name(other)));
                    }
                }
            }
            Some(props)
        }
        Some(other) => {
            violations.push(format!("{path}.props: expected object or null, found {}", type_name(other)));
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "coerce_test.rs"]
mod tests;

//! System instruction sent with every graph extraction request.

/// Hard cap on nodes the model is asked to return.
pub const MAX_NODES: usize = 80;

/// Hard cap on edges the model is asked to return.
pub const MAX_EDGES: usize = 200;

/// Maximum length of a model-generated node id.
pub const MAX_ID_LEN: usize = 12;

/// Build the fixed extraction instruction.
///
/// The instruction pins the JSON schema, id normalization, dedup and edge
/// policy, size caps, the empty-input answer and a deterministic sort order.
#[must_use]
pub fn build_system_prompt() -> String {
    format!(
        r#"<task>
You turn a short natural-language description of a system or process into a compact JSON graph.
If the description is not in English, keep labels in the author's language but follow the schema exactly.
</task>

<schema>
Return ONLY this JSON object:
{{
  "nodes": [{{"id": "ID", "label": "Human Name", "kind": null, "props": null}}],
  "edges": [{{"source": "ID", "target": "ID", "label": "relation", "kind": null}}]
}}
The only top-level keys are "nodes" and "edges".
"kind" and "props" stay null unless the description explicitly gives types or properties; "props" values are strings.
</schema>

<normalization>
- Create a node only for an entity the text actually mentions. Never invent entities.
- id: 1-{MAX_ID_LEN} characters, unique, ASCII lowercase letters, digits and underscore only.
  Derive it from the label: transliterate to ASCII, lower_snake_case, drop spaces and symbols.
  On collision append _2, _3 and so on.
- label: the readable original name, trimmed, without trailing quotes or periods.
- Deduplicate: one node per real-world entity, even when it is worded differently in several places.
- Create an edge whenever a relation, interaction or direction is stated.
  The edge label is the verb or phrase of the interaction (calls, reads, publishes, writes to, depends on).
  When direction is implicit pick the most likely one ("A calls B" means A to B).
</normalization>

<limits>
At most {MAX_NODES} nodes and {MAX_EDGES} edges. If the text implies more, keep the most important ones.
If the description is empty or unusable, return {{"nodes": [], "edges": []}}.
</limits>

<output>
Output a raw JSON object only: no prose, no markdown fences, no comments.
Sort "nodes" by "id" ascending. Sort "edges" stably by (source, target, label).
</output>

<examples>
<example>
<input>User logs in to API; API reads users from Database.</input>
<output>{{"nodes":[{{"id":"api","label":"API","kind":null,"props":null}},{{"id":"database","label":"Database","kind":null,"props":null}},{{"id":"user","label":"User","kind":null,"props":null}}],"edges":[{{"source":"api","target":"database","label":"reads","kind":null}},{{"source":"user","target":"api","label":"logs in","kind":null}}]}}</output>
</example>
<example>
<input>API publishes events to Kafka; Worker consumes from Kafka and writes to Postgres.</input>
<output>{{"nodes":[{{"id":"api","label":"API","kind":null,"props":null}},{{"id":"kafka","label":"Kafka","kind":null,"props":null}},{{"id":"postgres","label":"Postgres","kind":null,"props":null}},{{"id":"worker","label":"Worker","kind":null,"props":null}}],"edges":[{{"source":"api","target":"kafka","label":"publishes","kind":null}},{{"source":"worker","target":"kafka","label":"consumes","kind":null}},{{"source":"worker","target":"postgres","label":"writes to","kind":null}}]}}</output>
</example>
<example>
<input>(empty or unclear)</input>
<output>{{"nodes":[],"edges":[]}}</output>
</example>
</examples>"#
    )
}

//! Excalidraw scene JSON with a fixed three-column grid layout.
//!
//! Arrows are placed on the same grid by edge index and are not bound to
//! their endpoint rectangles; the endpoints ride along in `customData`.

use serde::Serialize;

use super::DiagramKind;
use crate::graph::Graph;

const COLUMNS: usize = 3;
const DX: usize = 240;
const DY: usize = 160;
const NODE_WIDTH: u32 = 180;
const NODE_HEIGHT: u32 = 60;
const ARROW_LENGTH: u32 = 120;
const ARROW_OFFSET_X: usize = 30;
const ARROW_OFFSET_Y: usize = 90;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scene<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    source: &'static str,
    elements: Vec<Element<'a>>,
    app_state: AppState,
}

#[derive(Serialize)]
struct AppState {}

#[derive(Serialize)]
#[serde(untagged)]
enum Element<'a> {
    Rectangle(Rectangle<'a>),
    Arrow(Arrow<'a>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rectangle<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    version_nonce: u32,
    is_deleted: bool,
    id: &'a str,
    x: usize,
    y: usize,
    width: u32,
    height: u32,
    angle: u32,
    stroke_color: &'static str,
    background_color: &'static str,
    roughness: u32,
    seed: usize,
    text: &'a str,
    font_size: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Arrow<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    version_nonce: u32,
    is_deleted: bool,
    id: String,
    points: [Point; 2],
    x: usize,
    y: usize,
    custom_data: Endpoints<'a>,
}

#[derive(Serialize)]
struct Endpoints<'a> {
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(Serialize)]
struct Point {
    x: u32,
    y: u32,
}

fn grid(index: usize) -> (usize, usize) {
    ((index % COLUMNS) * DX, (index / COLUMNS) * DY)
}

#[must_use]
pub fn render(graph: &Graph, _kind: DiagramKind) -> String {
    let rectangles = graph.nodes.iter().enumerate().map(|(i, node)| {
        let (x, y) = grid(i);
        Element::Rectangle(Rectangle {
            kind: "rectangle",
            version: 1,
            version_nonce: 0,
            is_deleted: false,
            id: &node.id,
            x,
            y,
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            angle: 0,
            stroke_color: "#1e293b",
            background_color: "#ffffff",
            roughness: 1,
            seed: i,
            text: node.display_label(),
            font_size: 20,
        })
    });
    let arrows = graph.edges.iter().enumerate().map(|(j, edge)| {
        let (x, y) = grid(j);
        Element::Arrow(Arrow {
            kind: "arrow",
            version: 1,
            version_nonce: 0,
            is_deleted: false,
            id: format!("edge_{j}"),
            points: [Point { x: 0, y: 0 }, Point { x: ARROW_LENGTH, y: 0 }],
            x: ARROW_OFFSET_X + x,
            y: ARROW_OFFSET_Y + y,
            custom_data: Endpoints { source: &edge.source, target: &edge.target, label: edge.non_empty_label() },
        })
    });
    let scene = Scene {
        kind: "excalidraw",
        version: 2,
        source: "text2diagram",
        elements: rectangles.chain(arrows).collect(),
        app_state: AppState {},
    };
    serde_json::to_string_pretty(&scene).unwrap_or_else(|_| "{}".into())
}

//! Layout types: NodeSpec, EdgeSpec, Point, PositionedNode, RoutedEdge, LayoutResult.

use serde::Serialize;
use serde_json::Value;

// ─── Constants ────────────────────────────────────────────────────────────────

pub const DUMMY_PREFIX: &str = "__dummy_";

// ─── Inputs ───────────────────────────────────────────────────────────────────

/// One employee box as the engine sees it: a stable id, fixed dimensions and
/// an opaque payload that is carried through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub display_payload: Value,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            display_payload: Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.display_payload = payload;
        self
    }
}

/// A manager → report relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub manager_id: String,
    pub report_id: String,
}

impl EdgeSpec {
    pub fn new(manager_id: impl Into<String>, report_id: impl Into<String>) -> Self {
        Self {
            manager_id: manager_id.into(),
            report_id: report_id.into(),
        }
    }
}

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── PositionedNode ──────────────────────────────────────────────────────────

/// A real node with its computed rank, order and top-left pixel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    pub order: usize,
    pub display_payload: Value,
}

impl PositionedNode {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

// ─── RoutedEdge ───────────────────────────────────────────────────────────────

/// An original relationship with the polyline it should be drawn along.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedEdge {
    pub source_id: String,
    pub target_id: String,
    pub path: Vec<Point>,
}

impl RoutedEdge {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            path: Vec::new(),
        }
    }
}

// ─── BoundingBox ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest box enclosing every node rectangle and every edge point.
    pub fn enclosing(nodes: &[PositionedNode], edges: &[RoutedEdge]) -> Self {
        let mut xs_min = f64::INFINITY;
        let mut ys_min = f64::INFINITY;
        let mut xs_max = f64::NEG_INFINITY;
        let mut ys_max = f64::NEG_INFINITY;
        for n in nodes {
            xs_min = xs_min.min(n.x);
            ys_min = ys_min.min(n.y);
            xs_max = xs_max.max(n.x + n.width);
            ys_max = ys_max.max(n.y + n.height);
        }
        for p in edges.iter().flat_map(|e| e.path.iter()) {
            xs_min = xs_min.min(p.x);
            ys_min = ys_min.min(p.y);
            xs_max = xs_max.max(p.x);
            ys_max = ys_max.max(p.y);
        }
        if !xs_min.is_finite() {
            return Self::default();
        }
        Self {
            min_x: xs_min,
            min_y: ys_min,
            max_x: xs_max,
            max_y: ys_max,
        }
    }
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// Non-fatal conditions reported alongside a valid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutWarning {
    /// Zero nodes were supplied; the layout is empty but valid.
    EmptyGraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub rank_count: usize,
    pub dummy_count: usize,
    pub initial_crossings: usize,
    pub crossings: usize,
    pub sweeps: usize,
}

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub positioned_nodes: Vec<PositionedNode>,
    pub routed_edges: Vec<RoutedEdge>,
    pub bounding_box: BoundingBox,
    pub stats: LayoutStats,
    /// Employees kept out of the chart because they have no relationship,
    /// as the records the client sent (numeric ids stay numbers).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self {
            positioned_nodes: Vec::new(),
            routed_edges: Vec::new(),
            bounding_box: BoundingBox::default(),
            stats: LayoutStats::default(),
            unassigned: Vec::new(),
            warnings: vec![LayoutWarning::EmptyGraph],
        }
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.positioned_nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, source_id: &str, target_id: &str) -> Option<&RoutedEdge> {
        self.routed_edges
            .iter()
            .find(|e| e.source_id == source_id && e.target_id == target_id)
    }

    pub fn is_empty(&self) -> bool {
        self.positioned_nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;

//! Layout engine — GraphModel → Ranking → dummy insertion → Ordering →
//! Coordinate Assignment → Edge Router.

pub mod graph;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;
pub mod route;
pub mod types;

pub use graph::OrgGraph;
pub use types::{
    BoundingBox, EdgeSpec, LayoutResult, LayoutStats, LayoutWarning, NodeSpec, Point,
    PositionedNode, RoutedEdge,
};

use crate::config::LayoutConfig;
use crate::error::Result;

/// Run the full layout pipeline over validated-on-entry node and edge specs.
///
/// Pure and deterministic: identical input yields identical output, and any
/// validation or cycle failure aborts before anything is computed.
pub fn layout(nodes: &[NodeSpec], edges: &[EdgeSpec], config: &LayoutConfig) -> Result<LayoutResult> {
    config.validate()?;
    let graph = OrgGraph::build(nodes, edges)?;
    if graph.is_empty() {
        tracing::debug!("empty org chart");
        return Ok(LayoutResult::empty());
    }

    let ranking = rank::assign_ranks(&graph);
    let layered = normalize::insert_dummy_nodes(&graph, &ranking);
    let roots: Vec<usize> = graph.roots.iter().map(|r| r.index()).collect();
    let order = order::order_ranks(&layered, &roots, config.max_sweeps, config.patience);
    let coords = position::assign_coordinates(&layered, &order, config);

    let mut positioned_nodes = position::positioned_nodes(&graph, &layered, &order, &coords);
    let mut routed_edges = route::route_edges(&graph, &layered, &coords, config.curved_edges);
    let mut bounding_box = BoundingBox::enclosing(&positioned_nodes, &routed_edges);

    if config.origin_at_zero {
        let (dx, dy) = (-bounding_box.min_x, -bounding_box.min_y);
        translate(&mut positioned_nodes, &mut routed_edges, dx, dy);
        bounding_box = BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: bounding_box.max_x + dx,
            max_y: bounding_box.max_y + dy,
        };
    }

    let stats = LayoutStats {
        rank_count: ranking.rank_count,
        dummy_count: layered.dummy_count(),
        initial_crossings: order.initial_crossings,
        crossings: order.crossings,
        sweeps: order.sweeps,
    };
    tracing::debug!(
        nodes = positioned_nodes.len(),
        edges = routed_edges.len(),
        ranks = stats.rank_count,
        crossings = stats.crossings,
        "layout complete"
    );

    Ok(LayoutResult {
        positioned_nodes,
        routed_edges,
        bounding_box,
        stats,
        unassigned: Vec::new(),
        warnings: Vec::new(),
    })
}

fn translate(nodes: &mut [PositionedNode], edges: &mut [RoutedEdge], dx: f64, dy: f64) {
    for n in nodes {
        n.x += dx;
        n.y += dy;
    }
    for p in edges.iter_mut().flat_map(|e| e.path.iter_mut()) {
        p.x += dx;
        p.y += dy;
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pipeline.rs"]
mod tests;

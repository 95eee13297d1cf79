//! Edge routing.
//!
//! Each relationship leaves its manager at bottom-centre and enters the
//! report at top-centre. Long relationships pass vertically through the
//! slot of every dummy node on their chain; the dummies themselves are
//! never emitted.

use super::graph::OrgGraph;
use super::normalize::{LayerNodeKind, LayeredGraph};
use super::position::Coordinates;
use super::types::{Point, RoutedEdge};

pub fn route_edges(
    graph: &OrgGraph,
    layered: &LayeredGraph,
    coords: &Coordinates,
    curved: bool,
) -> Vec<RoutedEdge> {
    let mut routes = Vec::with_capacity(layered.chains.len());
    for (edge_idx, chain) in layered.chains.iter().enumerate() {
        let (src, tgt) = graph.edges[edge_idx];
        let (first, last) = match (chain.first(), chain.last()) {
            (Some(&f), Some(&l)) if chain.len() >= 2 => (f, l),
            _ => continue,
        };

        let mut path = vec![Point::new(coords.center_x[first], box_bottom(layered, coords, first))];
        for &d in &chain[1..chain.len() - 1] {
            debug_assert!(matches!(
                layered.nodes[d].kind,
                LayerNodeKind::Dummy { edge } if edge == edge_idx
            ));
            let rank = layered.nodes[d].rank;
            push_distinct(&mut path, Point::new(coords.center_x[d], coords.rank_top[rank]));
            push_distinct(&mut path, Point::new(coords.center_x[d], coords.rank_bottom(rank)));
        }
        let end = Point::new(coords.center_x[last], box_top(layered, coords, last));

        if curved && chain.len() == 2 {
            let start = path[0];
            path.push(Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0));
        }
        path.push(end);

        let mut route = RoutedEdge::new(graph.node(src).id.clone(), graph.node(tgt).id.clone());
        route.path = path;
        routes.push(route);
    }
    tracing::debug!(edges = routes.len(), "edges routed");
    routes
}

fn box_top(layered: &LayeredGraph, coords: &Coordinates, n: usize) -> f64 {
    let node = &layered.nodes[n];
    coords.rank_top[node.rank] + (coords.rank_height[node.rank] - node.height) / 2.0
}

fn box_bottom(layered: &LayeredGraph, coords: &Coordinates, n: usize) -> f64 {
    box_top(layered, coords, n) + layered.nodes[n].height
}

fn push_distinct(path: &mut Vec<Point>, p: Point) {
    if path.last() != Some(&p) {
        path.push(p);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_route.rs"]
mod tests;

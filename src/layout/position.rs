//! Coordinate assignment.
//!
//! Ranks stack top to bottom; inside a rank nodes are packed left to right in
//! their crossing-minimised order, centred on x = 0. A few straightening
//! passes then pull every node towards its neighbours in the adjacent ranks.
//! Each pass solves the "stay close to the target without overlapping"
//! problem for a whole rank at once (isotonic regression by pool-adjacent-
//! violators), so the order inside a rank never changes and neighbouring
//! boxes always keep at least the configured separation.

use super::normalize::{LayerNodeKind, LayeredGraph};
use super::order::RankOrder;
use super::types::PositionedNode;
use crate::config::LayoutConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    /// layered node index → horizontal centre.
    pub center_x: Vec<f64>,
    /// rank → y of the rank's top edge.
    pub rank_top: Vec<f64>,
    /// rank → height of the tallest box in the rank.
    pub rank_height: Vec<f64>,
}

impl Coordinates {
    pub fn rank_bottom(&self, rank: usize) -> f64 {
        self.rank_top[rank] + self.rank_height[rank]
    }
}

pub fn assign_coordinates(
    layered: &LayeredGraph,
    order: &RankOrder,
    config: &LayoutConfig,
) -> Coordinates {
    let rank_count = order.layers.len();

    let mut rank_height = vec![0.0f64; rank_count];
    for node in &layered.nodes {
        rank_height[node.rank] = rank_height[node.rank].max(node.height);
    }
    let mut rank_top = Vec::with_capacity(rank_count);
    let mut y = 0.0;
    for &h in &rank_height {
        rank_top.push(y);
        y += h + config.rank_separation;
    }

    let mut slot_x = vec![0.0f64; layered.node_count()];
    for layer in &order.layers {
        let total: f64 = layer.iter().map(|&n| layered.nodes[n].width).sum::<f64>()
            + config.node_separation * layer.len().saturating_sub(1) as f64;
        let mut cursor = -total / 2.0;
        for &n in layer {
            let w = layered.nodes[n].width;
            slot_x[n] = cursor + w / 2.0;
            cursor += w + config.node_separation;
        }
    }

    let gaps: Vec<Vec<f64>> = order
        .layers
        .iter()
        .map(|layer| {
            layer
                .windows(2)
                .map(|p| {
                    (layered.nodes[p[0]].width + layered.nodes[p[1]].width) / 2.0
                        + config.node_separation
                })
                .collect()
        })
        .collect();

    let mut center_x = slot_x.clone();
    let weight = config.straighten_weight;
    for _ in 0..config.straighten_iterations {
        for rank in 1..rank_count {
            straighten_rank(
                &order.layers[rank],
                &gaps[rank],
                &layered.up,
                &slot_x,
                &mut center_x,
                weight,
            );
        }
        for rank in (0..rank_count.saturating_sub(1)).rev() {
            straighten_rank(
                &order.layers[rank],
                &gaps[rank],
                &layered.down,
                &slot_x,
                &mut center_x,
                weight,
            );
        }
    }

    tracing::debug!(ranks = rank_count, height = y, "coordinates assigned");
    Coordinates {
        center_x,
        rank_top,
        rank_height,
    }
}

/// Move one rank towards the mean of each node's `neighbours`.
fn straighten_rank(
    layer: &[usize],
    gaps: &[f64],
    neighbours: &[Vec<usize>],
    slot_x: &[f64],
    center_x: &mut [f64],
    weight: f64,
) {
    if layer.is_empty() {
        return;
    }
    let desired: Vec<f64> = layer
        .iter()
        .map(|&n| {
            let nbs = &neighbours[n];
            if nbs.is_empty() {
                return center_x[n];
            }
            let mean = nbs.iter().map(|&m| center_x[m]).sum::<f64>() / nbs.len() as f64;
            (1.0 - weight) * slot_x[n] + weight * mean
        })
        .collect();
    let packed = pack(&desired, gaps);
    for (&n, x) in layer.iter().zip(packed) {
        center_x[n] = x;
    }
}

/// Positions closest (least squares) to `desired` such that consecutive
/// entries are at least `gaps[i]` apart.
pub fn pack(desired: &[f64], gaps: &[f64]) -> Vec<f64> {
    debug_assert_eq!(gaps.len() + 1, desired.len().max(1));
    let mut offsets = Vec::with_capacity(desired.len());
    let mut acc = 0.0;
    for i in 0..desired.len() {
        if i > 0 {
            acc += gaps[i - 1];
        }
        offsets.push(acc);
    }

    // (sum, count) blocks with non-decreasing means.
    let mut blocks: Vec<(f64, usize)> = Vec::with_capacity(desired.len());
    for (d, o) in desired.iter().zip(&offsets) {
        blocks.push((d - o, 1));
        while blocks.len() >= 2 {
            let (s_b, c_b) = blocks[blocks.len() - 1];
            let (s_a, c_a) = blocks[blocks.len() - 2];
            if s_a / c_a as f64 <= s_b / c_b as f64 {
                break;
            }
            blocks.pop();
            let last = blocks.len() - 1;
            blocks[last] = (s_a + s_b, c_a + c_b);
        }
    }

    let mut out = Vec::with_capacity(desired.len());
    for (sum, count) in blocks {
        let mean = sum / count as f64;
        out.extend(std::iter::repeat_n(mean, count));
    }
    out.iter_mut().zip(&offsets).for_each(|(x, o)| *x += o);
    out
}

/// Real nodes with top-left coordinates, rank by rank in final order.
///
/// `order` counts real nodes only; dummies never reach the output.
pub fn positioned_nodes(
    graph: &super::graph::OrgGraph,
    layered: &LayeredGraph,
    order: &RankOrder,
    coords: &Coordinates,
) -> Vec<PositionedNode> {
    let mut out = Vec::with_capacity(graph.node_count());
    for (rank, layer) in order.layers.iter().enumerate() {
        let reals = layer.iter().filter_map(|&n| match layered.nodes[n].kind {
            LayerNodeKind::Real(idx) => Some((n, idx)),
            LayerNodeKind::Dummy { .. } => None,
        });
        for (position, (n, idx)) in reals.enumerate() {
            let data = graph.node(idx);
            out.push(PositionedNode {
                id: data.id.clone(),
                x: coords.center_x[n] - data.width / 2.0,
                y: coords.rank_top[rank] + (coords.rank_height[rank] - data.height) / 2.0,
                width: data.width,
                height: data.height,
                rank,
                order: position,
                display_payload: data.display_payload.clone(),
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_position.rs"]
mod tests;

//! Dummy node insertion.
//!
//! Every relationship spanning more than one rank is split into a chain of
//! single-rank segments through synthetic, payload-less nodes so ordering and
//! coordinate assignment only ever see adjacent-rank edges.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use super::graph::OrgGraph;
use super::rank::Ranking;
use super::types::DUMMY_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerNodeKind {
    Real(NodeIndex),
    /// Carries original relationship `edge` (index into `OrgGraph::edges`).
    Dummy { edge: usize },
}

#[derive(Debug, Clone)]
pub struct LayerNode {
    pub id: String,
    pub rank: usize,
    pub width: f64,
    pub height: f64,
    pub kind: LayerNodeKind,
}

impl LayerNode {
    pub fn is_dummy(&self) -> bool {
        matches!(self.kind, LayerNodeKind::Dummy { .. })
    }
}

/// The ranked graph with long edges broken into adjacent-rank segments.
///
/// Real nodes keep their `OrgGraph` index; dummies are appended after them.
#[derive(Debug, Clone)]
pub struct LayeredGraph {
    pub nodes: Vec<LayerNode>,
    pub rank_count: usize,
    /// node → neighbours one rank above, in insertion order.
    pub up: Vec<Vec<usize>>,
    /// node → neighbours one rank below, in insertion order.
    pub down: Vec<Vec<usize>>,
    /// For every original relationship: source, dummies top to bottom, target.
    pub chains: Vec<Vec<usize>>,
}

impl LayeredGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn dummy_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_dummy()).count()
    }

    /// Every adjacent-rank segment as (upper, lower).
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.down
            .iter()
            .enumerate()
            .flat_map(|(u, below)| below.iter().map(move |&v| (u, v)))
    }
}

pub fn insert_dummy_nodes(graph: &OrgGraph, ranking: &Ranking) -> LayeredGraph {
    let mut nodes: Vec<LayerNode> = graph
        .digraph
        .node_indices()
        .map(|idx| {
            let data = graph.node(idx);
            LayerNode {
                id: data.id.clone(),
                rank: ranking.rank_of(idx),
                width: data.width,
                height: data.height,
                kind: LayerNodeKind::Real(idx),
            }
        })
        .collect();

    let taken: HashSet<&str> = graph.node_index.keys().map(String::as_str).collect();
    let mut up: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut down: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut chains: Vec<Vec<usize>> = Vec::with_capacity(graph.edges.len());

    for (edge_idx, &(src, tgt)) in graph.edges.iter().enumerate() {
        let src_rank = ranking.rank_of(src);
        let tgt_rank = ranking.rank_of(tgt);
        debug_assert!(tgt_rank > src_rank, "ranking must point every edge downwards");

        let mut chain = vec![src.index()];
        for (step, rank) in (src_rank + 1..tgt_rank).enumerate() {
            let id = dummy_id(&taken, edge_idx, step);
            let d = nodes.len();
            nodes.push(LayerNode {
                id,
                rank,
                width: 0.0,
                height: 0.0,
                kind: LayerNodeKind::Dummy { edge: edge_idx },
            });
            up.push(Vec::new());
            down.push(Vec::new());
            chain.push(d);
        }
        chain.push(tgt.index());

        for pair in chain.windows(2) {
            down[pair[0]].push(pair[1]);
            up[pair[1]].push(pair[0]);
        }
        chains.push(chain);
    }

    let layered = LayeredGraph {
        nodes,
        rank_count: ranking.rank_count,
        up,
        down,
        chains,
    };
    tracing::debug!(
        nodes = layered.node_count(),
        dummies = layered.dummy_count(),
        "dummy nodes inserted"
    );
    layered
}

/// `__dummy_<edge>_<step>`, suffixed until it cannot clash with a real id.
fn dummy_id(taken: &HashSet<&str>, edge: usize, step: usize) -> String {
    let mut id = format!("{DUMMY_PREFIX}{edge}_{step}");
    while taken.contains(id.as_str()) {
        id.push('_');
    }
    id
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_normalize.rs"]
mod tests;

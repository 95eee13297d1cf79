//! Longest-path layering.

use super::graph::OrgGraph;

/// Per-node ranks, indexed by `NodeIndex::index()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub ranks: Vec<usize>,
    /// Number of ranks; 0 for an empty graph.
    pub rank_count: usize,
}

impl Ranking {
    pub fn rank_of(&self, idx: petgraph::graph::NodeIndex) -> usize {
        self.ranks[idx.index()]
    }

    /// Rank of the node with the given id, if it exists.
    pub fn rank_by_id(&self, graph: &OrgGraph, id: &str) -> Option<usize> {
        graph.index_of(id).map(|idx| self.rank_of(idx))
    }
}

/// Assign each node the length of the longest root path reaching it.
///
/// Nodes are visited in the graph's topological order, so every manager is
/// ranked before any of its reports. Roots land on rank 0; disconnected
/// hierarchies each start their own chain there.
pub fn assign_ranks(graph: &OrgGraph) -> Ranking {
    let mut ranks = vec![0usize; graph.node_count()];
    for &idx in &graph.topo_order {
        let rank = graph
            .parents(idx)
            .iter()
            .map(|p| ranks[p.index()] + 1)
            .max()
            .unwrap_or(0);
        ranks[idx.index()] = rank;
    }
    let rank_count = ranks.iter().copied().max().map_or(0, |m| m + 1);
    tracing::debug!(nodes = ranks.len(), rank_count, "ranks assigned");
    Ranking { ranks, rank_count }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_rank.rs"]
mod tests;

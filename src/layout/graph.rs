//! OrgGraph — validates employee/relationship records and builds a petgraph
//! DiGraph with parent/child adjacency and root detection.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{EdgeSpec, NodeSpec};
use crate::error::{LayoutError, Result, ValidationError};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub display_payload: serde_json::Value,
}

/// Validated reporting graph.
///
/// Node indices follow input order, and `children`/`parents` keep relationship
/// input order, so every later stage iterates deterministically.
#[derive(Debug, Clone)]
pub struct OrgGraph {
    pub digraph: DiGraph<NodeData, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// Relationships in input order, as (manager, report).
    pub edges: Vec<(NodeIndex, NodeIndex)>,
    /// Nodes with no incoming relationship, in input order.
    pub roots: Vec<NodeIndex>,
    /// A topological order of all nodes.
    pub topo_order: Vec<NodeIndex>,
    children: Vec<Vec<NodeIndex>>,
    parents: Vec<Vec<NodeIndex>>,
}

impl OrgGraph {
    /// Validate the records and build the graph.
    ///
    /// Fails on duplicate ids, box sizes that are negative or not finite,
    /// relationships naming unknown employees, repeated relationships, and
    /// any reporting cycle.
    pub fn build(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> Result<Self> {
        let mut digraph: DiGraph<NodeData, ()> = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());

        for spec in nodes {
            if node_index.contains_key(&spec.id) {
                return Err(ValidationError::DuplicateNode {
                    id: spec.id.clone(),
                }
                .into());
            }
            if !is_valid_extent(spec.width) || !is_valid_extent(spec.height) {
                return Err(ValidationError::InvalidSize {
                    id: spec.id.clone(),
                    width: spec.width,
                    height: spec.height,
                }
                .into());
            }
            let idx = digraph.add_node(NodeData {
                id: spec.id.clone(),
                width: spec.width,
                height: spec.height,
                display_payload: spec.display_payload.clone(),
            });
            node_index.insert(spec.id.clone(), idx);
        }

        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::with_capacity(edges.len());
        let mut edge_list = Vec::with_capacity(edges.len());
        let mut children = vec![Vec::new(); nodes.len()];
        let mut parents = vec![Vec::new(); nodes.len()];

        for edge in edges {
            let from = lookup(&node_index, edge, &edge.manager_id)?;
            let to = lookup(&node_index, edge, &edge.report_id)?;
            if !seen.insert((from, to)) {
                return Err(ValidationError::DuplicateRelationship {
                    manager_id: edge.manager_id.clone(),
                    report_id: edge.report_id.clone(),
                }
                .into());
            }
            digraph.add_edge(from, to, ());
            edge_list.push((from, to));
            children[from.index()].push(to);
            parents[to.index()].push(from);
        }

        let topo_order = toposort(&digraph, None).map_err(|cycle| LayoutError::Cycle {
            node: digraph[cycle.node_id()].id.clone(),
        })?;

        let roots = digraph
            .node_indices()
            .filter(|&idx| {
                digraph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();

        Ok(Self {
            digraph,
            node_index,
            edges: edge_list,
            roots,
            topo_order,
            children,
            parents,
        })
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn node(&self, idx: NodeIndex) -> &NodeData {
        &self.digraph[idx]
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Direct reports of `idx`, in relationship input order.
    pub fn children(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.children[idx.index()]
    }

    /// Managers of `idx`, in relationship input order.
    pub fn parents(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.parents[idx.index()]
    }

    pub fn root_ids(&self) -> Vec<&str> {
        self.roots
            .iter()
            .map(|&idx| self.digraph[idx].id.as_str())
            .collect()
    }
}

fn is_valid_extent(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn lookup(node_index: &HashMap<String, NodeIndex>, edge: &EdgeSpec, id: &str) -> Result<NodeIndex> {
    node_index.get(id).copied().ok_or_else(|| {
        ValidationError::UnknownEndpoint {
            manager_id: edge.manager_id.clone(),
            report_id: edge.report_id.clone(),
            missing: id.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;

//! Configuration for the layout pipeline.
//!
//! Defaults follow the chart the web client draws: 280×140 boxes, 100px
//! between ranks and 60px between neighbouring boxes.

use serde::Deserialize;

use crate::error::{LayoutError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width used for employees that do not carry their own.
    pub node_width: f64,
    /// Height used for employees that do not carry their own.
    pub node_height: f64,
    /// Vertical gap between the bottom of one rank and the top of the next.
    pub rank_separation: f64,
    /// Horizontal gap between neighbouring boxes in a rank.
    pub node_separation: f64,
    /// Upper bound on down+up ordering passes.
    pub max_sweeps: usize,
    /// Passes without a crossing improvement before ordering stops early.
    pub patience: usize,
    /// Number of straightening passes in coordinate assignment.
    pub straighten_iterations: usize,
    /// Weight of the neighbour mean against the packed slot position (0..=1).
    pub straighten_weight: f64,
    /// Add a midpoint control point on single-rank edges.
    pub curved_edges: bool,
    /// Translate the output so the bounding box starts at (0, 0).
    pub origin_at_zero: bool,
    /// Move employees without any relationship out of the chart.
    pub detach_unassigned: bool,
    /// Stable-sort employees by department label before layout.
    ///
    /// Labels compare case-insensitively by Unicode scalar value; accented
    /// letters sort after the unaccented alphabet rather than beside it.
    pub group_by_department: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 280.0,
            node_height: 140.0,
            rank_separation: 100.0,
            node_separation: 60.0,
            max_sweeps: 24,
            patience: 4,
            straighten_iterations: 4,
            straighten_weight: 0.85,
            curved_edges: false,
            origin_at_zero: true,
            detach_unassigned: false,
            group_by_department: false,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        let geometry = [
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("rankSeparation", self.rank_separation),
            ("nodeSeparation", self.node_separation),
        ];
        for (name, value) in geometry {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.max_sweeps == 0 {
            return Err(LayoutError::Config("maxSweeps must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.straighten_weight) {
            return Err(LayoutError::Config(format!(
                "straightenWeight must be within [0, 1], got {}",
                self.straighten_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;

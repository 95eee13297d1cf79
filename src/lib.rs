//! orgchart-layout — hierarchical layout engine for organisational charts.
//!
//! Public API: [`compute_layout`] and [`compute_layout_json`].
//!
//! Given employees and manager → report relationships, computes ranks, a
//! crossing-minimised left-to-right order, pixel coordinates and a routed
//! path for every relationship. The computation is a pure function of its
//! input: no I/O, no shared state, identical input yields identical output.

pub mod config;
pub mod error;
pub mod layout;
pub mod payload;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::LayoutConfig;
pub use crate::error::{LayoutError, Result, ValidationError};
pub use crate::layout::{
    BoundingBox, EdgeSpec, LayoutResult, LayoutWarning, NodeSpec, Point, PositionedNode,
    RoutedEdge,
};
pub use crate::payload::{Employee, OrgChartPayload, Relationship};

/// Lay out a snapshot of employees and relationships.
///
/// Any validation or cycle failure aborts the whole request; an empty
/// employee list yields an empty layout carrying [`LayoutWarning::EmptyGraph`].
pub fn compute_layout(
    employees: &[Employee],
    relationships: &[Relationship],
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    let input = payload::chart_input(employees, relationships, config);
    let mut result = layout::layout(&input.nodes, &input.edges, config).inspect_err(|e| {
        tracing::warn!(error = %e, "org chart layout rejected");
    })?;
    result.unassigned = input.unassigned;
    Ok(result)
}

/// Parse a `{employees, relationships}` JSON payload and lay it out.
pub fn compute_layout_payload(input: &str, config: &LayoutConfig) -> Result<LayoutResult> {
    let payload = OrgChartPayload::from_json(input)?;
    compute_layout(&payload.employees, &payload.relationships, config)
}

/// JSON in, JSON out: the shape consumed by the rendering layer.
pub fn compute_layout_json(input: &str, config: &LayoutConfig) -> Result<String> {
    let result = compute_layout_payload(input, config)?;
    Ok(serde_json::to_string(&result)?)
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;

//! Ingestion of the org-chart payload `{employees: [...], relationships: [...]}`.
//!
//! Employee ids arrive either as numbers (backend entity ids) or strings and
//! are compared by their string form. Relationships come flat (`{managerId, reportId}`)
//! or in the backend's nested form (`{manager: {id} | null, doctor: {id}}`);
//! a null manager marks an explicit root and contributes no edge.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::LayoutConfig;
use crate::layout::types::{EdgeSpec, NodeSpec};

/// Employee id, compared by its string form. The JSON value it arrived as
/// is kept so records handed back to the client are unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawId")]
pub struct EmployeeId {
    text: String,
    raw: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for EmployeeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => EmployeeId {
                text: n.to_string(),
                raw: Value::Number(n),
            },
            RawId::Text(s) => EmployeeId::new(s),
        }
    }
}

impl PartialEq for EmployeeId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for EmployeeId {}

impl Hash for EmployeeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        let text = id.into();
        let raw = Value::String(text.clone());
        Self { text, raw }
    }

    /// The id as it appeared in the payload (number or string).
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// One employee record. Everything except `id`, `width` and `height` is
/// display data and passes through to the output untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub display: Map<String, Value>,
}

impl Employee {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(id),
            width: None,
            height: None,
            display: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.display.insert(key.to_string(), value.into());
        self
    }

    /// `departmentLabel`, or the backend's `departmentName`.
    pub fn department_label(&self) -> &str {
        self.display
            .get("departmentLabel")
            .or_else(|| self.display.get("departmentName"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn to_node_spec(&self, config: &LayoutConfig) -> NodeSpec {
        NodeSpec::new(
            self.id.as_str(),
            self.width.unwrap_or(config.node_width),
            self.height.unwrap_or(config.node_height),
        )
        .with_payload(Value::Object(self.display.clone()))
    }

    fn to_record(&self) -> Value {
        let mut record = Map::with_capacity(self.display.len() + 3);
        record.insert("id".to_string(), self.id.raw().clone());
        if let Some(w) = self.width {
            record.insert("width".to_string(), w.into());
        }
        if let Some(h) = self.height {
            record.insert("height".to_string(), h.into());
        }
        record.extend(self.display.iter().map(|(k, v)| (k.clone(), v.clone())));
        Value::Object(record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeRef {
    pub id: EmployeeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Relationship {
    Flat {
        #[serde(rename = "managerId", default)]
        manager_id: Option<EmployeeId>,
        #[serde(rename = "reportId")]
        report_id: EmployeeId,
    },
    Nested {
        manager: Option<EmployeeRef>,
        doctor: EmployeeRef,
    },
}

impl Relationship {
    pub fn new(manager_id: impl Into<String>, report_id: impl Into<String>) -> Self {
        Relationship::Flat {
            manager_id: Some(EmployeeId::new(manager_id)),
            report_id: EmployeeId::new(report_id),
        }
    }

    /// A root marker: `report_id` explicitly has no manager.
    pub fn root(report_id: impl Into<String>) -> Self {
        Relationship::Flat {
            manager_id: None,
            report_id: EmployeeId::new(report_id),
        }
    }

    pub fn manager_id(&self) -> Option<&EmployeeId> {
        match self {
            Relationship::Flat { manager_id, .. } => manager_id.as_ref(),
            Relationship::Nested { manager, .. } => manager.as_ref().map(|m| &m.id),
        }
    }

    pub fn report_id(&self) -> &EmployeeId {
        match self {
            Relationship::Flat { report_id, .. } => report_id,
            Relationship::Nested { doctor, .. } => &doctor.id,
        }
    }

    pub fn to_edge(&self) -> Option<EdgeSpec> {
        self.manager_id()
            .map(|m| EdgeSpec::new(m.as_str(), self.report_id().as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrgChartPayload {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl OrgChartPayload {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}

/// Engine input extracted from a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    /// Employee records left out of the chart (see `LayoutConfig::detach_unassigned`).
    pub unassigned: Vec<Value>,
}

pub fn chart_input(
    employees: &[Employee],
    relationships: &[Relationship],
    config: &LayoutConfig,
) -> ChartInput {
    let edges: Vec<EdgeSpec> = relationships.iter().filter_map(Relationship::to_edge).collect();

    let mut charted: Vec<&Employee> = Vec::with_capacity(employees.len());
    let mut unassigned = Vec::new();
    if config.detach_unassigned {
        let mentioned: HashSet<&str> = relationships
            .iter()
            .flat_map(|r| {
                std::iter::once(r.report_id().as_str()).chain(r.manager_id().map(EmployeeId::as_str))
            })
            .collect();
        for emp in employees {
            if mentioned.contains(emp.id.as_str()) {
                charted.push(emp);
            } else {
                unassigned.push(emp.to_record());
            }
        }
    } else {
        charted.extend(employees);
    }

    if config.group_by_department {
        charted.sort_by_cached_key(|e| e.department_label().to_lowercase());
    }

    ChartInput {
        nodes: charted.iter().map(|e| e.to_node_spec(config)).collect(),
        edges,
        unassigned,
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_payload.rs"]
mod tests;

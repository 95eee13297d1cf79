//! Error taxonomy for the layout engine.

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Input data that cannot form an org chart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("relationship {manager_id} -> {report_id} references unknown employee '{missing}'")]
    UnknownEndpoint {
        manager_id: String,
        report_id: String,
        missing: String,
    },

    #[error("duplicate employee id '{id}'")]
    DuplicateNode { id: String },

    #[error("employee '{id}' has invalid size {width}x{height}")]
    InvalidSize { id: String, width: f64, height: f64 },

    #[error("duplicate relationship {manager_id} -> {report_id}")]
    DuplicateRelationship {
        manager_id: String,
        report_id: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid org chart: {0}")]
    Validation(#[from] ValidationError),

    #[error("reporting cycle detected involving employee '{node}'")]
    Cycle { node: String },

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid layout config: {0}")]
    Config(String),
}

impl LayoutError {
    /// The employee id the error points at, when there is one.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            LayoutError::Validation(ValidationError::UnknownEndpoint { missing, .. }) => {
                Some(missing)
            }
            LayoutError::Validation(
                ValidationError::DuplicateNode { id } | ValidationError::InvalidSize { id, .. },
            ) => Some(id),
            LayoutError::Validation(ValidationError::DuplicateRelationship { report_id, .. }) => {
                Some(report_id)
            }
            LayoutError::Cycle { node } => Some(node),
            LayoutError::Payload(_) | LayoutError::Config(_) => None,
        }
    }
}

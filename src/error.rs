use thiserror::Error;

use crate::types::IncidentId;

/// Reasons a draft incident is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("description cannot be empty")]
    EmptyDescription,
}

#[derive(Error, Debug)]
pub enum IncidentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid severity '{0}' (expected low, medium or high)")]
    InvalidSeverity(String),

    #[error("invalid severity filter '{0}' (expected all, low, medium or high)")]
    InvalidSeverityFilter(String),

    #[error("invalid sort order '{0}' (expected asc or desc)")]
    InvalidSortOrder(String),

    #[error("invalid theme mode '{0}' (expected light or dark)")]
    InvalidThemeMode(String),

    #[error("invalid timestamp '{0}': {1}")]
    InvalidTimestamp(String, String),

    #[error("duplicate incident id {0}")]
    DuplicateId(IncidentId),

    #[error("incident id space exhausted")]
    IdExhausted,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl IncidentError {
    pub fn invalid_severity(value: String) -> Self {
        IncidentError::InvalidSeverity(value)
    }

    pub fn invalid_sort_order(value: String) -> Self {
        IncidentError::InvalidSortOrder(value)
    }

    pub fn invalid_theme_mode(value: String) -> Self {
        IncidentError::InvalidThemeMode(value)
    }

    /// The validation failure wrapped by this error, if any
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            IncidentError::Validation(v) => Some(*v),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IncidentError>;

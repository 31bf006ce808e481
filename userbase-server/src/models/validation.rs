//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields absent or empty, in declaration order
    Missing { fields: Vec<&'static str> },

    /// Field exceeds the column width
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Fields the caller has to fix.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::Missing { fields } => fields.clone(),
            Self::TooLong { field, .. } => vec![*field],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

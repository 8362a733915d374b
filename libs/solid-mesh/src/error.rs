//! # Mesh Errors
//!
//! Error types for mesh generation. Parameter checks run before any buffer
//! is allocated, so an error never comes with a partial mesh.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// An input failed its stated constraint.
    #[error("Invalid parameter `{field}`: must be {constraint} (got {value})")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// The violated constraint, e.g. "at least 3"
        constraint: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The requested tessellation does not fit in `u32` indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: u64,
        /// Largest supported vertex count
        max: usize,
    },

    /// A generated mesh broke one of its own invariants.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Which invariant was broken
        message: String,
    },

    /// Parameters could not be parsed.
    #[error("Invalid parameter document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid(field: &'static str, constraint: &'static str, value: impl Into<f64>) -> Self {
        Self::InvalidParameter {
            field,
            constraint,
            value: value.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Name of the offending field for [`MeshError::InvalidParameter`].
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

//! # Motion Errors

use solid_mesh::MeshError;
use thiserror::Error;

/// Errors raised by the motion components and the controller.
#[derive(Debug, Error)]
pub enum MotionError {
    /// A setting fell outside its allowed range.
    #[error("`{name}` must be within {min}..={max} (got {value})")]
    OutOfRange {
        /// Name of the setting
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A frame was advanced by a negative or non-finite time step.
    #[error("Invalid time step: {0}")]
    InvalidTimeStep(f64),

    /// The displacer was applied to a mesh it was not created from.
    #[error("Vertex count mismatch: expected {expected}, got {actual}")]
    VertexCountMismatch {
        /// Vertices captured in the snapshot
        expected: usize,
        /// Vertices in the mesh passed in
        actual: usize,
    },

    /// Mesh generation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A settings or tool call document could not be parsed.
    #[error("Invalid document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MotionError {
    /// Creates an out of range error.
    pub fn out_of_range(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            name,
            value,
            min,
            max,
        }
    }
}

/// Result type alias for motion operations.
pub type MotionResult<T> = Result<T, MotionError>;

/// Checks that `value` is finite and within `min..=max`.
pub(crate) fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> MotionResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(MotionError::out_of_range(name, value, min, max))
    }
}

/// Rejects negative and non-finite frame times.
pub(crate) fn check_time_step(dt: f64) -> MotionResult<()> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::InvalidTimeStep(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range("a", 0.0, 0.0, 20.0).is_ok());
        assert!(check_range("a", 20.0, 0.0, 20.0).is_ok());
        assert!(check_range("a", 20.5, 0.0, 20.0).is_err());
        assert!(check_range("a", f64::NAN, 0.0, 20.0).is_err());
    }

    #[test]
    fn test_out_of_range_display() {
        let msg = MotionError::out_of_range("frequency_x", 25.0, 0.0, 20.0).to_string();
        assert!(msg.contains("frequency_x"));
        assert!(msg.contains("25"));
    }

    #[test]
    fn test_time_step() {
        assert!(check_time_step(0.0).is_ok());
        assert!(matches!(
            check_time_step(-0.1),
            Err(MotionError::InvalidTimeStep(_))
        ));
        assert!(check_time_step(f64::INFINITY).is_err());
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: MotionError = MeshError::validation("broken").into();
        assert!(matches!(err, MotionError::Mesh(_)));
        assert!(err.to_string().contains("broken"));
    }
}

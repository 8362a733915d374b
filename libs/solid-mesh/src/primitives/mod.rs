//! # Primitives
//!
//! Mesh generation for the two building blocks of the combined solid.

pub mod cone;
pub mod sphere;

pub use cone::generate_cone;
pub use sphere::generate_sphere;

use crate::error::{MeshError, MeshResult};
use config::constants::MAX_VERTICES;

/// Rejects tessellations whose vertex ids would not fit in `u32` indices.
pub(crate) fn check_vertex_budget(count: u64) -> MeshResult<()> {
    if count > MAX_VERTICES as u64 {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}

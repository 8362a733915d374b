//! # Solid Mesh
//!
//! Deterministic procedural generation of a sphere fused with a coaxial
//! cone, emitted as plain arrays (positions, normals, UVs, triangle indices)
//! that any renderer can copy into its own buffers.
//!
//! ## Architecture
//!
//! ```text
//! MeshParameters ──validate──▶ generate_sphere ─┐
//!                              generate_cone  ──┴─▶ combine ──▶ TriangleMesh
//! ```
//!
//! Generation is synchronous and allocates fresh buffers per call, so
//! independent builds may run on different threads
//! ([`CombinedSolidMeshBuilder::build_many`]).
//!
//! ## Usage
//!
//! ```rust
//! use solid_mesh::{CombinedSolidMeshBuilder, MeshParameters};
//!
//! let params = MeshParameters {
//!     sphere_latitude_segments: 3,
//!     sphere_longitude_segments: 3,
//!     cone_segments: 3,
//!     ..MeshParameters::default()
//! };
//! let mesh = CombinedSolidMeshBuilder::new(params).build()?;
//! assert_eq!(mesh.vertex_count(), 4 * 4 + 1 + 4);
//! # Ok::<(), solid_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod combine;
pub mod error;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use builder::CombinedSolidMeshBuilder;
pub use combine::combine;
pub use error::{MeshError, MeshResult};
pub use mesh::TriangleMesh;
pub use params::{ConePlacement, ConeTransform, MeshParameters};
pub use primitives::{generate_cone, generate_sphere};

//! # Sphere + Cone Fusion
//!
//! Places the cone on the sphere with a rigid transform and concatenates the
//! two sub-meshes. Per-vertex normals of each part are kept; the only
//! cross-part adjustment is the optional seam blend on the cone base ring.

use crate::error::{MeshError, MeshResult};
use crate::mesh::TriangleMesh;
use crate::params::ConeTransform;
use config::constants::{approx_equal, approx_zero};
use glam::DVec3;
use tracing::debug;

/// Index of the apex in a cone produced by `generate_cone`.
const APEX: usize = 0;

/// Combines a sphere (centred at the origin) with a cone given in its local
/// frame.
///
/// # Arguments
///
/// * `sphere` - Sphere sub-mesh, copied unchanged
/// * `cone` - Cone sub-mesh as produced by
///   [`generate_cone`](crate::primitives::generate_cone)
/// * `placement` - Rotation and axial offset applied to the cone
/// * `seam_blend` - Weight (0..=1) of the sphere's radial normal mixed into
///   the cone base ring normals; 0 disables the post-pass
///
/// # Returns
///
/// Sphere vertices first, cone vertices second. Cone indices are offset by
/// the sphere vertex count; nothing is deduplicated across the seam.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{combine, ConeTransform};
/// use solid_mesh::primitives::{generate_cone, generate_sphere};
/// use glam::DVec3;
///
/// let sphere = generate_sphere(1.0, 8, 16).unwrap();
/// let cone = generate_cone(0.5, 1.0, 8, false).unwrap();
/// let placement = ConeTransform::along(DVec3::Z, 0.8);
/// let mesh = combine(&sphere, &cone, &placement, 0.5).unwrap();
/// assert_eq!(mesh.vertex_count(), sphere.vertex_count() + cone.vertex_count());
/// ```
pub fn combine(
    sphere: &TriangleMesh,
    cone: &TriangleMesh,
    placement: &ConeTransform,
    seam_blend: f64,
) -> MeshResult<TriangleMesh> {
    if !(0.0..=1.0).contains(&seam_blend) {
        return Err(MeshError::invalid("seam_normal_blend", "within 0..=1", seam_blend));
    }

    let mut placed = cone.clone();
    placed.transform_rigid(placement.rotation, placement.translation());

    if !approx_zero(seam_blend) {
        let ring = base_ring_indices(cone);
        blend_seam_normals(&mut placed, &ring, placement.axis(), seam_blend);
    }

    let mut mesh = TriangleMesh::with_capacity(
        sphere.vertex_count() + placed.vertex_count(),
        sphere.triangle_count() + placed.triangle_count(),
    );
    mesh.append(sphere);
    mesh.append(&placed);

    mesh.validate()?;

    debug!(
        sphere_vertices = sphere.vertex_count(),
        cone_vertices = cone.vertex_count(),
        triangles = mesh.triangle_count(),
        "combined sphere and cone"
    );

    Ok(mesh)
}

/// Indices of the cone's base ring, read in the cone's local frame where
/// the base plane is exactly `y = 0`.
///
/// The apex (vertex 0) is skipped even for a flat cone, and so are the cap
/// vertices, whose normals point straight down the axis.
fn base_ring_indices(cone: &TriangleMesh) -> Vec<usize> {
    cone.vertices()
        .iter()
        .zip(cone.normals())
        .enumerate()
        .filter(|(i, (v, n))| *i != APEX && approx_zero(v.y) && !approx_equal(n.y, -1.0))
        .map(|(i, _)| i)
        .collect()
}

/// Mixes the sphere's outward normal into the placed cone's base ring.
fn blend_seam_normals(cone: &mut TriangleMesh, ring: &[usize], axis: DVec3, weight: f64) {
    let positions: Vec<DVec3> = ring.iter().map(|&i| cone.vertices()[i]).collect();
    let normals = cone.normals_mut();
    for (&index, position) in ring.iter().zip(positions) {
        let radial = position.try_normalize().unwrap_or(axis);
        let blended = normals[index].lerp(radial, weight);
        normals[index] = blended.try_normalize().unwrap_or(radial);
    }
}

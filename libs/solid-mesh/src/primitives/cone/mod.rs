//! # Cone Primitive
//!
//! Open cone with smooth lateral normals. The local frame matches the
//! sphere's: the axis is +Y, the base sits on the XZ plane.

use crate::error::MeshResult;
use crate::mesh::TriangleMesh;
use crate::params::{check_non_negative, check_segments, cone_vertex_count};
use crate::primitives::check_vertex_budget;
use config::constants::MIN_SEGMENTS;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Creates a cone mesh with its apex at `(0, height, 0)`.
///
/// # Arguments
///
/// * `radius` - Base radius (>= 0)
/// * `height` - Distance from the base plane to the apex (>= 0)
/// * `segments` - Segments around the base (>= 3)
/// * `base_cap` - Also emit a flat cap facing -Y
///
/// # Layout
///
/// - vertex 0: apex, normal = normalized sum of all side-face normals
/// - vertices `1..=segments+1`: base ring at angle `-2π·i/segments`, the
///   last one duplicating the first for the UV seam. Each normal is the
///   normalized sum of its two adjacent side faces.
/// - side triangles `(apex, base[i], base[i+1])`, facing outwards
/// - with `base_cap`: a centre vertex and a second ring with -Y normals
///
/// Faces that collapse (zero radius) fall back to a +Y normal.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::generate_cone;
///
/// let cone = generate_cone(0.5, 1.0, 8, false).unwrap();
/// assert_eq!(cone.vertex_count(), 10);
/// assert_eq!(cone.triangle_count(), 8);
/// ```
pub fn generate_cone(
    radius: f64,
    height: f64,
    segments: u32,
    base_cap: bool,
) -> MeshResult<TriangleMesh> {
    check_non_negative("cone_radius", radius)?;
    check_non_negative("cone_height", height)?;
    check_segments("cone_segments", segments, MIN_SEGMENTS, "at least 3")?;
    let vertex_count = cone_vertex_count(segments, base_cap);
    check_vertex_budget(vertex_count)?;

    let n = segments as usize;
    let angles: Vec<f64> = (0..=segments)
        .map(|i| -TAU * (i % segments) as f64 / segments as f64)
        .collect();
    let ring: Vec<DVec3> = angles
        .iter()
        .map(|a| DVec3::new(radius * a.cos(), 0.0, radius * a.sin()))
        .collect();
    let apex = DVec3::new(0.0, height, 0.0);

    let faces: Vec<DVec3> = (0..n)
        .map(|i| side_normal(ring[i], ring[i + 1], apex))
        .collect();

    let cap_triangles = if base_cap { n } else { 0 };
    let mut mesh = TriangleMesh::with_capacity(vertex_count as usize, n + cap_triangles);

    let apex_normal = faces.iter().sum::<DVec3>().try_normalize().unwrap_or(DVec3::Y);
    let apex_index = mesh.add_vertex(apex, apex_normal, DVec2::new(0.5, 1.0));

    for (i, position) in ring.iter().enumerate() {
        let before = faces[(i + n - 1) % n];
        let after = faces[i % n];
        let normal = (before + after).try_normalize().unwrap_or(DVec3::Y);
        mesh.add_vertex(*position, normal, DVec2::new(i as f64 / n as f64, 0.0));
    }

    for i in 0..segments {
        mesh.add_triangle(apex_index, apex_index + 1 + i, apex_index + 2 + i);
    }

    if base_cap {
        let centre = mesh.add_vertex(DVec3::ZERO, DVec3::NEG_Y, DVec2::splat(0.5));
        for (position, angle) in ring.iter().zip(&angles) {
            let uv = DVec2::new((angle.cos() + 1.0) * 0.5, (angle.sin() + 1.0) * 0.5);
            mesh.add_vertex(*position, DVec3::NEG_Y, uv);
        }
        for i in 0..segments {
            mesh.add_triangle(centre, centre + 2 + i, centre + 1 + i);
        }
    }

    Ok(mesh)
}

/// Outward normal of the side face spanning `b0 → b1`.
fn side_normal(b0: DVec3, b1: DVec3, apex: DVec3) -> DVec3 {
    (b1 - b0)
        .cross(apex - b0)
        .try_normalize()
        .unwrap_or(DVec3::Y)
}

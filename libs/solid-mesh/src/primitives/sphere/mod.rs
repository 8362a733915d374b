//! # Sphere Primitive
//!
//! Latitude/longitude sphere with exact radial normals and a duplicated
//! longitude seam so UVs can wrap from 1 back to 0.

use crate::error::MeshResult;
use crate::mesh::TriangleMesh;
use crate::params::{check_positive, check_segments, sphere_vertex_count};
use crate::primitives::check_vertex_budget;
use config::constants::{MIN_SEGMENTS, MIN_SPHERE_LATITUDE_SEGMENTS};
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};

/// Creates a sphere mesh centred at the origin with its poles on ±Y.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere (> 0)
/// * `latitude_segments` - Bands from north to south pole (>= 2)
/// * `longitude_segments` - Steps around the Y axis (>= 3)
///
/// # Algorithm
///
/// - `latitude_segments + 1` rings, θ = π·ring/latitude_segments
/// - `longitude_segments + 1` vertices per ring, φ = 2π·i/longitude_segments
/// - position = r·(sinθ·cosφ, cosθ, sinθ·sinφ), normal = unit radial,
///   uv = (φ/2π, θ/π)
/// - each quad is split into `(c, c+1, n)` and `(n, c+1, n+1)`, which faces
///   outwards. Quads touching a pole keep their collapsed triangle so the
///   triangle count is always `latitude · longitude · 2`.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::generate_sphere;
///
/// let mesh = generate_sphere(1.0, 2, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 15);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn generate_sphere(
    radius: f64,
    latitude_segments: u32,
    longitude_segments: u32,
) -> MeshResult<TriangleMesh> {
    check_positive("sphere_radius", radius)?;
    check_segments(
        "sphere_latitude_segments",
        latitude_segments,
        MIN_SPHERE_LATITUDE_SEGMENTS,
        "at least 2",
    )?;
    check_segments(
        "sphere_longitude_segments",
        longitude_segments,
        MIN_SEGMENTS,
        "at least 3",
    )?;
    check_vertex_budget(sphere_vertex_count(latitude_segments, longitude_segments))?;

    let lat = latitude_segments as usize;
    let lon = longitude_segments as usize;
    let mut mesh = TriangleMesh::with_capacity((lat + 1) * (lon + 1), lat * lon * 2);

    for ring in 0..=latitude_segments {
        let v = ring as f64 / latitude_segments as f64;
        let theta = PI * v;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for step in 0..=longitude_segments {
            let u = step as f64 / longitude_segments as f64;
            let (sin_phi, cos_phi) = (TAU * u).sin_cos();

            let direction = DVec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            mesh.add_vertex(
                direction * radius,
                direction.normalize(),
                DVec2::new(u, v),
            );
        }
    }

    let stride = longitude_segments + 1;
    for ring in 0..latitude_segments {
        for step in 0..longitude_segments {
            let current = ring * stride + step;
            let next = current + stride;

            mesh.add_triangle(current, current + 1, next);
            mesh.add_triangle(next, current + 1, next + 1);
        }
    }

    Ok(mesh)
}

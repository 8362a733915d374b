//! # Mesh Data Structure
//!
//! Triangle mesh with index-aligned positions, normals and texture
//! coordinates, plus a flat triangle index list.

use crate::error::{MeshError, MeshResult};
use config::constants::NORMAL_LENGTH_TOLERANCE;
use glam::{DQuat, DVec2, DVec3};

/// A triangle mesh with per-vertex normals and UVs.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when handing buffers to a renderer.
///
/// # Example
///
/// ```rust
/// use solid_mesh::TriangleMesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
/// mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
/// mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions (index = vertex id)
    vertices: Vec<DVec3>,
    /// Unit normals, aligned with `vertices`
    normals: Vec<DVec3>,
    /// Texture coordinates, aligned with `vertices`
    uvs: Vec<DVec2>,
    /// Flat triangle indices (3 per triangle)
    indices: Vec<u32>,
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its attributes and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Overwrites vertex positions, keeping normals, UVs and topology.
    ///
    /// # Errors
    ///
    /// Fails when `positions` does not match the current vertex count.
    pub fn set_vertices(&mut self, positions: Vec<DVec3>) -> MeshResult<()> {
        if positions.len() != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "expected {} positions, got {}",
                self.vertices.len(),
                positions.len()
            )));
        }
        self.vertices = positions;
        Ok(())
    }

    /// Overwrites vertex normals.
    ///
    /// # Errors
    ///
    /// Fails when `normals` does not match the current vertex count.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) -> MeshResult<()> {
        if normals.len() != self.normals.len() {
            return Err(MeshError::validation(format!(
                "expected {} normals, got {}",
                self.normals.len(),
                normals.len()
            )));
        }
        self.normals = normals;
        Ok(())
    }

    /// Mutable access to normals for post-passes that keep topology intact.
    pub(crate) fn normals_mut(&mut self) -> &mut [DVec3] {
        &mut self.normals
    }

    /// Recomputes area-weighted smooth normals from the triangles.
    ///
    /// Vertices without any non-degenerate face keep their previous normal.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![DVec3::ZERO; self.vertices.len()];

        for [a, b, c] in self.triangles() {
            let v0 = self.vertices[a as usize];
            let v1 = self.vertices[b as usize];
            let v2 = self.vertices[c as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            accumulated[a as usize] += normal;
            accumulated[b as usize] += normal;
            accumulated[c as usize] += normal;
        }

        for (normal, sum) in self.normals.iter_mut().zip(accumulated) {
            if let Some(unit) = sum.try_normalize() {
                *normal = unit;
            }
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Applies a rigid transform: rotate, then translate. Normals are only
    /// rotated, so they stay unit length.
    pub fn transform_rigid(&mut self, rotation: DQuat, translation: DVec3) {
        for v in &mut self.vertices {
            *v = rotation * *v + translation;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
    }

    /// Appends another mesh, offsetting its indices by this mesh's vertex
    /// count. No vertices are merged.
    pub fn append(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|&index| index + offset));
    }

    /// Validates the mesh data-model invariants.
    ///
    /// Checks:
    /// - Normals and UVs are aligned with vertices
    /// - Index list length is a multiple of 3
    /// - All triangle indices are in range
    /// - All normals are finite and unit length
    pub fn validate(&self) -> MeshResult<()> {
        let count = self.vertices.len();

        if self.normals.len() != count || self.uvs.len() != count {
            return Err(MeshError::validation(format!(
                "attribute lengths differ: {} vertices, {} normals, {} uvs",
                count,
                self.normals.len(),
                self.uvs.len()
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(MeshError::validation(format!(
                "index {bad} out of range for {count} vertices"
            )));
        }

        if let Some(i) = self
            .normals
            .iter()
            .position(|n| !n.is_finite() || (n.length() - 1.0).abs() > NORMAL_LENGTH_TOLERANCE)
        {
            return Err(MeshError::validation(format!(
                "normal {i} is not unit length: {:?}",
                self.normals[i]
            )));
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as flattened [u, v, u, v, ...] f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

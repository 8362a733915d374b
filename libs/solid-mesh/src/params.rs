//! # Generation Parameters
//!
//! Immutable inputs to the combined solid builder and the validation that
//! runs before any buffer is allocated.

use crate::error::{MeshError, MeshResult};
use config::constants::{
    DEFAULT_CONE_AXIS, DEFAULT_CONE_EMBED_DEPTH, DEFAULT_CONE_HEIGHT, DEFAULT_CONE_RADIUS,
    DEFAULT_CONE_SEGMENTS, DEFAULT_SPHERE_LATITUDE_SEGMENTS, DEFAULT_SPHERE_LONGITUDE_SEGMENTS,
    DEFAULT_SPHERE_RADIUS, EPSILON, MIN_SEGMENTS,
};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Geometric parameters of the sphere and the cone.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use solid_mesh::MeshParameters;
///
/// let params = MeshParameters::from_json(r#"{ "cone_segments": 16 }"#).unwrap();
/// assert_eq!(params.cone_segments, 16);
/// assert_eq!(params.sphere_radius, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParameters {
    /// Sphere radius (> 0)
    pub sphere_radius: f64,
    /// Latitude bands from pole to pole (>= 3)
    pub sphere_latitude_segments: u32,
    /// Longitude steps around the axis (>= 3)
    pub sphere_longitude_segments: u32,
    /// Cone base radius (>= 0)
    pub cone_radius: f64,
    /// Cone height from base plane to apex (>= 0)
    pub cone_height: f64,
    /// Segments around the cone base (>= 3)
    pub cone_segments: u32,
    /// Emit a flat cap over the cone base
    pub cone_base_cap: bool,
}

impl Default for MeshParameters {
    fn default() -> Self {
        Self {
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            sphere_latitude_segments: DEFAULT_SPHERE_LATITUDE_SEGMENTS,
            sphere_longitude_segments: DEFAULT_SPHERE_LONGITUDE_SEGMENTS,
            cone_radius: DEFAULT_CONE_RADIUS,
            cone_height: DEFAULT_CONE_HEIGHT,
            cone_segments: DEFAULT_CONE_SEGMENTS,
            cone_base_cap: false,
        }
    }
}

impl MeshParameters {
    /// Parses and validates parameters from a JSON document.
    ///
    /// # Errors
    ///
    /// [`MeshError::Parse`] for malformed JSON, [`MeshError::InvalidParameter`]
    /// for values outside their constraints.
    pub fn from_json(source: &str) -> MeshResult<Self> {
        let params: Self = serde_json::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its constraint.
    pub fn validate(&self) -> MeshResult<()> {
        check_positive("sphere_radius", self.sphere_radius)?;
        check_segments(
            "sphere_latitude_segments",
            self.sphere_latitude_segments,
            MIN_SEGMENTS,
            "at least 3",
        )?;
        check_segments(
            "sphere_longitude_segments",
            self.sphere_longitude_segments,
            MIN_SEGMENTS,
            "at least 3",
        )?;
        check_non_negative("cone_radius", self.cone_radius)?;
        check_non_negative("cone_height", self.cone_height)?;
        check_segments("cone_segments", self.cone_segments, MIN_SEGMENTS, "at least 3")?;
        Ok(())
    }

    /// Vertex count of the sphere sub-mesh.
    pub fn sphere_vertex_count(&self) -> u64 {
        sphere_vertex_count(self.sphere_latitude_segments, self.sphere_longitude_segments)
    }

    /// Vertex count of the cone sub-mesh.
    pub fn cone_vertex_count(&self) -> u64 {
        cone_vertex_count(self.cone_segments, self.cone_base_cap)
    }

    /// Vertex count of the combined mesh.
    pub fn total_vertex_count(&self) -> u64 {
        self.sphere_vertex_count()
            .saturating_add(self.cone_vertex_count())
    }
}

/// Where the cone is fused onto the sphere.
///
/// `axis` is the sphere-local direction the cone points along and
/// `embed_depth` how far its base plane sits inside the sphere surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConePlacement {
    /// Direction from the sphere centre towards the apex (non-zero)
    pub axis: DVec3,
    /// Depth of the base plane below the sphere surface (>= 0)
    pub embed_depth: f64,
}

impl Default for ConePlacement {
    fn default() -> Self {
        Self {
            axis: DVec3::from_array(DEFAULT_CONE_AXIS),
            embed_depth: DEFAULT_CONE_EMBED_DEPTH,
        }
    }
}

impl ConePlacement {
    /// Creates a placement along `axis` with the given embed depth.
    pub fn new(axis: DVec3, embed_depth: f64) -> Self {
        Self { axis, embed_depth }
    }

    /// Checks the axis is usable and the depth non-negative.
    pub fn validate(&self) -> MeshResult<()> {
        self.validate_within(EPSILON)
    }

    /// Like [`validate`](Self::validate), treating axes shorter than
    /// `tolerance` as zero.
    pub fn validate_within(&self, tolerance: f64) -> MeshResult<()> {
        if !self.axis.is_finite() || self.axis.length() < tolerance {
            return Err(MeshError::invalid(
                "cone_axis",
                "a finite non-zero vector",
                self.axis.length(),
            ));
        }
        check_non_negative("cone_embed_depth", self.embed_depth)
    }

    /// Resolves the placement into the rigid transform applied to the cone.
    ///
    /// When the cone base is narrower than the sphere, the base plane is put
    /// where the base circle meets the surface, then pushed `embed_depth`
    /// inwards so the whole ring lies inside the sphere. Otherwise the base
    /// plane is placed `embed_depth` below the surface point on the axis.
    pub fn resolve(&self, sphere_radius: f64, cone_radius: f64) -> MeshResult<ConeTransform> {
        self.resolve_within(sphere_radius, cone_radius, EPSILON)
    }

    /// [`resolve`](Self::resolve) with an explicit degeneracy tolerance.
    pub fn resolve_within(
        &self,
        sphere_radius: f64,
        cone_radius: f64,
        tolerance: f64,
    ) -> MeshResult<ConeTransform> {
        self.validate_within(tolerance)?;
        let surface = if cone_radius < sphere_radius {
            (sphere_radius * sphere_radius - cone_radius * cone_radius).sqrt()
        } else {
            sphere_radius
        };
        Ok(ConeTransform::along(self.axis, surface - self.embed_depth))
    }
}

/// Rigid transform taking the cone from its local frame (base on the XZ
/// plane, apex on +Y) onto the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeTransform {
    /// Rotation mapping local +Y onto the placement axis
    pub rotation: DQuat,
    /// Distance from the sphere centre to the cone base plane along the axis
    pub axial_offset: f64,
}

impl ConeTransform {
    /// Builds the transform for a cone pointing along `axis`.
    ///
    /// `axis` need not be normalized but must be non-zero.
    pub fn along(axis: DVec3, axial_offset: f64) -> Self {
        let axis = axis.try_normalize().unwrap_or(DVec3::Y);
        Self {
            rotation: DQuat::from_rotation_arc(DVec3::Y, axis),
            axial_offset,
        }
    }

    /// Builds the transform from an explicit rotation of the cone's +Y axis.
    pub fn from_rotation(rotation: DQuat, axial_offset: f64) -> Self {
        Self {
            rotation: rotation.normalize(),
            axial_offset,
        }
    }

    /// Unit direction the cone points along after rotation.
    pub fn axis(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Translation applied after rotation.
    pub fn translation(&self) -> DVec3 {
        self.axis() * self.axial_offset
    }
}

pub(crate) fn sphere_vertex_count(latitude_segments: u32, longitude_segments: u32) -> u64 {
    (u64::from(latitude_segments) + 1).saturating_mul(u64::from(longitude_segments) + 1)
}

pub(crate) fn cone_vertex_count(segments: u32, base_cap: bool) -> u64 {
    let ring = u64::from(segments) + 1;
    // apex + side ring, optionally centre + cap ring
    if base_cap {
        2 + 2 * ring
    } else {
        1 + ring
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(field, "finite and greater than 0", value))
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(field, "finite and at least 0", value))
    }
}

/// `constraint` is the message reported when `value` is below `min`.
pub(crate) fn check_segments(
    field: &'static str,
    value: u32,
    min: u32,
    constraint: &'static str,
) -> MeshResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(MeshError::invalid(field, constraint, value))
    }
}

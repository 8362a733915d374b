//! # Combined Solid Builder
//!
//! The build pipeline: validate → generate sphere → generate cone →
//! combine → return. Stateless apart from its immutable inputs, so one
//! builder can be shared across threads.

use crate::combine::combine;
use crate::error::{MeshError, MeshResult};
use crate::mesh::TriangleMesh;
use crate::params::{ConePlacement, MeshParameters};
use crate::primitives::{check_vertex_budget, generate_cone, generate_sphere};
use config::constants::{ConfigError, GlobalConfig};
use rayon::prelude::*;
use tracing::debug;

/// Builds the sphere-with-cone mesh from explicit inputs.
///
/// # Example
///
/// ```rust
/// use solid_mesh::{CombinedSolidMeshBuilder, MeshParameters};
///
/// let builder = CombinedSolidMeshBuilder::new(MeshParameters::default());
/// let mesh = builder.build().unwrap();
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombinedSolidMeshBuilder {
    params: MeshParameters,
    placement: ConePlacement,
    config: GlobalConfig,
}

impl CombinedSolidMeshBuilder {
    /// Creates a builder with the default placement and configuration.
    pub fn new(params: MeshParameters) -> Self {
        Self {
            params,
            placement: ConePlacement::default(),
            config: GlobalConfig::default(),
        }
    }

    /// Overrides where the cone is fused onto the sphere.
    pub fn with_placement(mut self, placement: ConePlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Overrides the shared configuration (tolerance, seam blend).
    pub fn with_config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the mesh parameters.
    pub fn params(&self) -> &MeshParameters {
        &self.params
    }

    /// Returns the cone placement.
    pub fn placement(&self) -> &ConePlacement {
        &self.placement
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`](crate::MeshError::InvalidParameter)
    /// when any input fails its constraint, checked before allocation.
    pub fn build(&self) -> MeshResult<TriangleMesh> {
        let params = &self.params;
        check_config(&self.config)?;
        params.validate()?;
        let transform = self.placement.resolve_within(
            params.sphere_radius,
            params.cone_radius,
            self.config.tolerance,
        )?;
        check_vertex_budget(params.total_vertex_count())?;

        let sphere = generate_sphere(
            params.sphere_radius,
            params.sphere_latitude_segments,
            params.sphere_longitude_segments,
        )?;
        let cone = generate_cone(
            params.cone_radius,
            params.cone_height,
            params.cone_segments,
            params.cone_base_cap,
        )?;
        let mesh = combine(&sphere, &cone, &transform, self.config.seam_normal_blend)?;

        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            axial_offset = transform.axial_offset,
            "generated combined solid mesh"
        );

        Ok(mesh)
    }

    /// Builds one mesh per parameter set in parallel, sharing this
    /// builder's placement and configuration. Results keep input order.
    pub fn build_many(&self, params: &[MeshParameters]) -> Vec<MeshResult<TriangleMesh>> {
        params
            .par_iter()
            .map(|p| Self { params: *p, ..*self }.build())
            .collect()
    }
}

fn check_config(config: &GlobalConfig) -> MeshResult<()> {
    config.validate().map_err(|err| match err {
        ConfigError::InvalidTolerance(value) => {
            MeshError::invalid("tolerance", "finite and greater than 0", value)
        }
        ConfigError::InvalidSeamBlend(value) => {
            MeshError::invalid("seam_normal_blend", "within 0..=1", value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use glam::DVec3;

    #[test]
    fn test_build_default() {
        let mesh = CombinedSolidMeshBuilder::default().build().unwrap();
        let params = MeshParameters::default();
        assert_eq!(mesh.vertex_count() as u64, params.total_vertex_count());
        assert_eq!(mesh.triangle_count(), 12 * 24 * 2 + 12);
    }

    #[test]
    fn test_build_rejects_invalid_before_generation() {
        let params = MeshParameters {
            sphere_longitude_segments: 2,
            ..MeshParameters::default()
        };
        let err = CombinedSolidMeshBuilder::new(params).build().unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidParameter { field: "sphere_longitude_segments", .. }
        ));
    }

    #[test]
    fn test_build_rejects_bad_placement() {
        let builder = CombinedSolidMeshBuilder::default()
            .with_placement(ConePlacement::new(DVec3::ZERO, 0.05));
        assert_eq!(builder.build().unwrap_err().field(), Some("cone_axis"));
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let bad_blend = GlobalConfig {
            seam_normal_blend: 2.0,
            ..GlobalConfig::default()
        };
        let err = CombinedSolidMeshBuilder::default()
            .with_config(bad_blend)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), Some("seam_normal_blend"));

        let nan_tolerance = GlobalConfig {
            tolerance: f64::NAN,
            ..GlobalConfig::default()
        };
        let err = CombinedSolidMeshBuilder::default()
            .with_config(nan_tolerance)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), Some("tolerance"));
    }

    #[test]
    fn test_build_with_cap_and_custom_axis() {
        let params = MeshParameters {
            cone_base_cap: true,
            ..MeshParameters::default()
        };
        let mesh = CombinedSolidMeshBuilder::new(params)
            .with_placement(ConePlacement::new(DVec3::NEG_X, 0.0))
            .build()
            .unwrap();
        let (min, _) = mesh.bounding_box();
        // apex sits at -(0.8 + 0.9) on X
        assert!((min.x + 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = CombinedSolidMeshBuilder::default();
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_build_many_preserves_order_and_errors() {
        let good = MeshParameters::default();
        let bad = MeshParameters {
            sphere_radius: 0.0,
            ..good
        };
        let finer = MeshParameters {
            sphere_latitude_segments: 20,
            ..good
        };
        let results = CombinedSolidMeshBuilder::default().build_many(&[good, bad, finer]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        let finer_mesh = results[2].as_ref().unwrap();
        assert_eq!(finer_mesh.vertex_count() as u64, finer.total_vertex_count());
    }
}

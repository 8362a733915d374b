//! # Noise Displacement
//!
//! Animates a mesh by pushing each vertex along its original normal by a
//! Perlin noise amount sampled at `(x·scale + time·speed, y·scale + time·speed)`.

use crate::error::{check_range, MotionError, MotionResult};
use config::constants::{DEFAULT_ANIMATION_SPEED, DEFAULT_DISPLACEMENT_AMPLITUDE, DEFAULT_NOISE_SCALE};
use glam::DVec3;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use solid_mesh::TriangleMesh;
use std::fmt;

/// Displacement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplacementSettings {
    /// Multiplier on vertex coordinates before sampling (larger = busier)
    pub noise_scale: f64,
    /// Largest offset along the normal, in mesh units
    pub amplitude: f64,
    /// How fast the noise field scrolls with time
    pub animation_speed: f64,
    /// Perlin permutation seed
    pub seed: u32,
}

impl Default for DisplacementSettings {
    fn default() -> Self {
        Self {
            noise_scale: DEFAULT_NOISE_SCALE,
            amplitude: DEFAULT_DISPLACEMENT_AMPLITUDE,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            seed: 0,
        }
    }
}

impl DisplacementSettings {
    /// Rejects negative amplitudes and non-finite values.
    pub fn validate(&self) -> MotionResult<()> {
        check_range("noise_scale", self.noise_scale, f64::MIN, f64::MAX)?;
        check_range("amplitude", self.amplitude, 0.0, f64::MAX)?;
        check_range("animation_speed", self.animation_speed, f64::MIN, f64::MAX)
    }
}

/// Snapshot of a mesh's rest pose plus the noise field that deforms it.
///
/// The snapshot is taken once; every [`apply`](Self::apply) starts from the
/// rest pose, so frames never accumulate error.
#[derive(Clone)]
pub struct NoiseDisplacer {
    settings: DisplacementSettings,
    perlin: Perlin,
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
}

impl fmt::Debug for NoiseDisplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseDisplacer")
            .field("settings", &self.settings)
            .field("vertices", &self.positions.len())
            .finish()
    }
}

impl NoiseDisplacer {
    /// Captures the rest pose of `mesh`.
    pub fn new(mesh: &TriangleMesh, settings: DisplacementSettings) -> MotionResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            perlin: Perlin::new(settings.seed),
            positions: mesh.vertices().to_vec(),
            normals: mesh.normals().to_vec(),
        })
    }

    /// Settings in use.
    pub fn settings(&self) -> &DisplacementSettings {
        &self.settings
    }

    /// Number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Noise value in `0..=1` for a rest position at `time`.
    pub fn noise_at(&self, position: DVec3, time: f64) -> f64 {
        let shift = time * self.settings.animation_speed;
        let sample = self.perlin.get([
            position.x * self.settings.noise_scale + shift,
            position.y * self.settings.noise_scale + shift,
        ]);
        (sample * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Positions of the snapshot displaced for `time`.
    pub fn displaced_positions(&self, time: f64) -> Vec<DVec3> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| *p + *n * (self.settings.amplitude * self.noise_at(*p, time)))
            .collect()
    }

    /// Writes the displaced pose for `time` into `mesh` and recomputes its
    /// normals from the new faces.
    ///
    /// # Errors
    ///
    /// [`MotionError::VertexCountMismatch`] when `mesh` is not the mesh the
    /// snapshot was taken from.
    pub fn apply(&self, mesh: &mut TriangleMesh, time: f64) -> MotionResult<()> {
        if mesh.vertex_count() != self.positions.len() {
            return Err(MotionError::VertexCountMismatch {
                expected: self.positions.len(),
                actual: mesh.vertex_count(),
            });
        }
        mesh.set_vertices(self.displaced_positions(time))?;
        mesh.recompute_normals();
        Ok(())
    }

    /// Puts the rest pose back into `mesh`, normals included.
    pub fn restore(&self, mesh: &mut TriangleMesh) -> MotionResult<()> {
        if mesh.vertex_count() != self.positions.len() {
            return Err(MotionError::VertexCountMismatch {
                expected: self.positions.len(),
                actual: mesh.vertex_count(),
            });
        }
        mesh.set_vertices(self.positions.clone())?;
        mesh.set_normals(self.normals.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_mesh::generate_sphere;

    fn sphere() -> TriangleMesh {
        generate_sphere(1.0, 8, 16).unwrap()
    }

    #[test]
    fn test_noise_is_normalized() {
        let displacer = NoiseDisplacer::new(&sphere(), DisplacementSettings::default()).unwrap();
        for i in 0..50 {
            let p = DVec3::new(i as f64 * 0.37, i as f64 * -0.21, 0.0);
            let n = displacer.noise_at(p, i as f64 * 0.1);
            assert!((0.0..=1.0).contains(&n));
        }
    }

    #[test]
    fn test_displacement_bounded_and_along_normal() {
        let mesh = sphere();
        let settings = DisplacementSettings {
            amplitude: 0.3,
            ..DisplacementSettings::default()
        };
        let displacer = NoiseDisplacer::new(&mesh, settings).unwrap();
        let moved = displacer.displaced_positions(1.25);
        for ((rest, normal), p) in mesh.vertices().iter().zip(mesh.normals()).zip(&moved) {
            let offset = *p - *rest;
            assert!(offset.length() <= 0.3 + 1e-12);
            assert!(offset.cross(*normal).length() < 1e-12);
            assert!(offset.dot(*normal) >= 0.0);
        }
    }

    #[test]
    fn test_apply_recomputes_normals() {
        let mut mesh = sphere();
        let displacer = NoiseDisplacer::new(&mesh, DisplacementSettings::default()).unwrap();
        displacer.apply(&mut mesh, 0.6).unwrap();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertices(), displacer.displaced_positions(0.6).as_slice());
    }

    #[test]
    fn test_apply_is_repeatable() {
        let mut a = sphere();
        let mut b = sphere();
        let displacer = NoiseDisplacer::new(&a, DisplacementSettings::default()).unwrap();
        displacer.apply(&mut a, 0.1).unwrap();
        displacer.apply(&mut a, 2.0).unwrap();
        displacer.apply(&mut b, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_amplitude_keeps_positions() {
        let mut mesh = sphere();
        let rest = mesh.vertices().to_vec();
        let settings = DisplacementSettings {
            amplitude: 0.0,
            ..DisplacementSettings::default()
        };
        NoiseDisplacer::new(&mesh, settings)
            .unwrap()
            .apply(&mut mesh, 3.0)
            .unwrap();
        assert_eq!(mesh.vertices(), rest.as_slice());
    }

    #[test]
    fn test_restore_returns_rest_pose() {
        let mut mesh = sphere();
        let rest = mesh.clone();
        let displacer = NoiseDisplacer::new(&mesh, DisplacementSettings::default()).unwrap();
        displacer.apply(&mut mesh, 0.9).unwrap();
        displacer.restore(&mut mesh).unwrap();
        assert_eq!(mesh, rest);
    }

    #[test]
    fn test_vertex_count_mismatch() {
        let displacer = NoiseDisplacer::new(&sphere(), DisplacementSettings::default()).unwrap();
        let mut other = generate_sphere(1.0, 4, 4).unwrap();
        assert!(matches!(
            displacer.apply(&mut other, 0.0),
            Err(MotionError::VertexCountMismatch { expected: 153, actual: 25 })
        ));
    }

    #[test]
    fn test_negative_amplitude_rejected() {
        let settings = DisplacementSettings {
            amplitude: -0.1,
            ..DisplacementSettings::default()
        };
        assert!(NoiseDisplacer::new(&sphere(), settings).is_err());
    }
}

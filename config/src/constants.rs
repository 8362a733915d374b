//! # Configuration Constants
//!
//! Centralized constants for the combined solid mesh pipeline. Mesh
//! generation defaults, numeric tolerances, and the tunables of the
//! per-frame behaviors are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Mesh**: Sphere and cone tessellation defaults
//! - **Placement**: Where the cone is fused onto the sphere
//! - **Limits**: Maximum values for safety bounds
//! - **Motion**: Lissajous, rotation, noise and color defaults

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when deciding whether a vector is degenerate (zero length) or two
/// positions coincide.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for unit-length checks on stored normals.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_LENGTH_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-9;
/// assert!((length - 1.0).abs() < NORMAL_LENGTH_TOLERANCE);
/// ```
pub const NORMAL_LENGTH_TOLERANCE: f64 = 1e-6;

// =============================================================================
// MESH CONSTANTS
// =============================================================================

/// Minimum segment count for any ring of vertices (a triangle).
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum latitude segments for a standalone sphere.
///
/// Two bands (pole, equator, pole) already close the surface. The combined
/// build still requires [`MIN_SEGMENTS`].
pub const MIN_SPHERE_LATITUDE_SEGMENTS: u32 = 2;

/// Default sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

/// Default number of latitude bands on the sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SPHERE_LATITUDE_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(DEFAULT_SPHERE_LATITUDE_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const DEFAULT_SPHERE_LATITUDE_SEGMENTS: u32 = 12;

/// Default number of longitude steps around the sphere.
pub const DEFAULT_SPHERE_LONGITUDE_SEGMENTS: u32 = 24;

/// Default cone base radius.
pub const DEFAULT_CONE_RADIUS: f64 = 0.6;

/// Default cone height, measured from the base plane to the apex.
pub const DEFAULT_CONE_HEIGHT: f64 = 0.9;

/// Default number of segments around the cone base.
pub const DEFAULT_CONE_SEGMENTS: u32 = 12;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Default direction (sphere-local) along which the cone points.
///
/// +Z is the "front" of the object.
pub const DEFAULT_CONE_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// Default distance the cone base plane sits inside the sphere surface.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CONE_EMBED_DEPTH, DEFAULT_SPHERE_RADIUS};
///
/// assert!(DEFAULT_CONE_EMBED_DEPTH < DEFAULT_SPHERE_RADIUS);
/// ```
pub const DEFAULT_CONE_EMBED_DEPTH: f64 = 0.05;

/// Default weight of the sphere's radial normal when blending the cone base
/// ring normals at the seam.
///
/// 0.0 keeps the cone normals untouched, 1.0 replaces them with the sphere's.
pub const DEFAULT_SEAM_NORMAL_BLEND: f64 = 0.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Triangle indices are `u32`, so every vertex id must fit in one.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// MOTION CONSTANTS
// =============================================================================

/// Default Lissajous amplitude along X.
pub const DEFAULT_LISSAJOUS_AMPLITUDE_X: f64 = 4.0;

/// Default Lissajous amplitude along Y.
pub const DEFAULT_LISSAJOUS_AMPLITUDE_Y: f64 = 4.0;

/// Default Lissajous angular frequency along X.
pub const DEFAULT_LISSAJOUS_FREQUENCY_X: f64 = 5.0;

/// Default Lissajous angular frequency along Y.
pub const DEFAULT_LISSAJOUS_FREQUENCY_Y: f64 = 4.0;

/// Default Lissajous phase offset on the X term, in radians.
pub const DEFAULT_LISSAJOUS_PHASE: f64 = 2.3;

/// Inclusive upper bound for every Lissajous parameter (lower bound is 0).
pub const LISSAJOUS_PARAM_MAX: f64 = 20.0;

/// Default look-at angular speed in degrees per second.
pub const DEFAULT_ANGULAR_SPEED_DEG: f64 = 90.0;

/// Default scale applied to coordinates before sampling Perlin noise.
pub const DEFAULT_NOISE_SCALE: f64 = 1.0;

/// Default displacement amplitude along the vertex normal.
pub const DEFAULT_DISPLACEMENT_AMPLITUDE: f64 = 0.2;

/// Default multiplier on time for the noise animation.
pub const DEFAULT_ANIMATION_SPEED: f64 = 1.0;

/// Default uniform scale applied to the generated object.
pub const DEFAULT_OBJECT_SCALE: f64 = 0.05;

/// Color shown when the target is directly behind the object (blue).
pub const COLOR_BEHIND: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Color shown when the target is directly in front of the object (red).
pub const COLOR_IN_FRONT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the settings shared between the mesh and motion
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance for degeneracy checks.
    pub tolerance: f64,
    /// Weight of the sphere normal in the seam post-pass (0.0..=1.0).
    pub seam_normal_blend: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and seam blend.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.25).expect("valid config");
    /// assert_eq!(cfg.seam_normal_blend, 0.25);
    /// ```
    pub fn new(tolerance: f64, seam_normal_blend: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            seam_normal_blend,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields of a configuration that may have been assembled
    /// directly rather than through [`GlobalConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !(0.0..=1.0).contains(&self.seam_normal_blend) {
            return Err(ConfigError::InvalidSeamBlend(self.seam_normal_blend));
        }
        Ok(())
    }

    /// Same configuration with the seam post-pass disabled.
    pub fn without_seam_blend(self) -> Self {
        Self {
            seam_normal_blend: 0.0,
            ..self
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            seam_normal_blend: DEFAULT_SEAM_NORMAL_BLEND,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is not a finite positive number.
    InvalidTolerance(f64),
    /// Raised when the seam blend falls outside `0.0..=1.0`.
    InvalidSeamBlend(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSeamBlend(value) => {
                write!(f, "seam_normal_blend must be within 0..=1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

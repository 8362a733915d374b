//! # Facing Color
//!
//! Tints the object blue when the target is behind it and red when the
//! target is straight ahead.

use config::constants::{COLOR_BEHIND, COLOR_IN_FRONT};
use glam::{DVec3, Vec4};

/// Linear RGBA color.
pub type Rgba = [f32; 4];

/// Color for an object at `position` facing `forward`, looking for `target`.
///
/// `t = (forward · dir + 1) / 2` where `dir` is the unit direction to the
/// target, then the color is `lerp(blue, red, t)`. Coincident points give
/// the midpoint.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_motion::facing_color;
///
/// let ahead = facing_color(DVec3::Z, DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0));
/// assert_eq!(ahead, [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn facing_color(forward: DVec3, position: DVec3, target: DVec3) -> Rgba {
    let direction = (target - position).normalize_or_zero();
    let t = (forward.normalize_or_zero().dot(direction) + 1.0) * 0.5;
    lerp_color(COLOR_BEHIND, COLOR_IN_FRONT, t.clamp(0.0, 1.0) as f32)
}

/// Component-wise interpolation between two colors.
pub fn lerp_color(from: Rgba, to: Rgba, t: f32) -> Rgba {
    Vec4::from_array(from)
        .lerp(Vec4::from_array(to), t)
        .to_array()
}

//! # Rotate Towards
//!
//! Turns the object's +Z axis toward a target at a bounded angular speed.

use crate::error::{check_range, check_time_step, MotionResult};
use config::constants::{DEFAULT_ANGULAR_SPEED_DEG, EPSILON};
use glam::{DMat3, DQuat, DVec3};

/// Rotation whose +Z axis points along `direction`, using `up` as the hint
/// for +Y.
///
/// Falls back to the shortest arc from +Z when `up` is parallel to
/// `direction`. Returns `None` for a zero direction.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_motion::rotation::look_rotation;
///
/// let q = look_rotation(DVec3::X, DVec3::Y).unwrap();
/// assert!((q * DVec3::Z - DVec3::X).length() < 1e-12);
/// assert!((q * DVec3::Y - DVec3::Y).length() < 1e-12);
/// ```
pub fn look_rotation(direction: DVec3, up: DVec3) -> Option<DQuat> {
    let forward = direction.try_normalize()?;
    let Some(right) = up.cross(forward).try_normalize() else {
        return Some(DQuat::from_rotation_arc(DVec3::Z, forward));
    };
    let up = forward.cross(right);
    Some(DQuat::from_mat3(&DMat3::from_cols(right, up, forward)).normalize())
}

/// Rotates `from` toward `to` by at most `max_radians`.
pub fn rotate_towards(from: DQuat, to: DQuat, max_radians: f64) -> DQuat {
    if max_radians <= 0.0 {
        return from;
    }
    let angle = from.angle_between(to);
    if angle <= max_radians || angle < EPSILON {
        return to;
    }
    from.slerp(to, max_radians / angle)
}

/// Rate limiter for turning toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateTowards {
    angular_speed_deg: f64,
}

impl Default for RotateTowards {
    fn default() -> Self {
        Self {
            angular_speed_deg: DEFAULT_ANGULAR_SPEED_DEG,
        }
    }
}

impl RotateTowards {
    /// Creates a rotator turning at `angular_speed_deg` degrees per second.
    pub fn new(angular_speed_deg: f64) -> MotionResult<Self> {
        check_range("angular_speed", angular_speed_deg, 0.0, f64::MAX)?;
        Ok(Self { angular_speed_deg })
    }

    /// Angular speed in degrees per second.
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed_deg
    }

    /// Changes the angular speed.
    pub fn set_angular_speed(&mut self, angular_speed_deg: f64) -> MotionResult<()> {
        *self = Self::new(angular_speed_deg)?;
        Ok(())
    }

    /// One frame of turning: rotates `current` toward the rotation looking
    /// from `position` at `target` by at most `speed · dt` degrees.
    ///
    /// `current` comes back unchanged when the two points coincide.
    pub fn step(
        &self,
        current: DQuat,
        position: DVec3,
        target: DVec3,
        dt: f64,
    ) -> MotionResult<DQuat> {
        check_time_step(dt)?;
        let Some(goal) = look_rotation(target - position, DVec3::Y) else {
            return Ok(current);
        };
        let max_step = (self.angular_speed_deg * dt).to_radians();
        Ok(rotate_towards(current, goal, max_step))
    }
}

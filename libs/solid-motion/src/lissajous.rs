//! # Lissajous Motion
//!
//! Moves the object along `(A·sin(a·t + δ), B·sin(b·t), 0)`.

use crate::error::{check_range, check_time_step, MotionResult};
use config::constants::{
    DEFAULT_LISSAJOUS_AMPLITUDE_X, DEFAULT_LISSAJOUS_AMPLITUDE_Y, DEFAULT_LISSAJOUS_FREQUENCY_X,
    DEFAULT_LISSAJOUS_FREQUENCY_Y, DEFAULT_LISSAJOUS_PHASE, LISSAJOUS_PARAM_MAX,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Shape of the Lissajous curve. Every value lies in `0..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LissajousParams {
    /// Amplitude along X (A)
    pub amplitude_x: f64,
    /// Amplitude along Y (B)
    pub amplitude_y: f64,
    /// Angular frequency along X (a)
    pub frequency_x: f64,
    /// Angular frequency along Y (b)
    pub frequency_y: f64,
    /// Phase offset of the X term (δ)
    pub phase: f64,
}

impl Default for LissajousParams {
    fn default() -> Self {
        Self {
            amplitude_x: DEFAULT_LISSAJOUS_AMPLITUDE_X,
            amplitude_y: DEFAULT_LISSAJOUS_AMPLITUDE_Y,
            frequency_x: DEFAULT_LISSAJOUS_FREQUENCY_X,
            frequency_y: DEFAULT_LISSAJOUS_FREQUENCY_Y,
            phase: DEFAULT_LISSAJOUS_PHASE,
        }
    }
}

impl LissajousParams {
    /// Checks every parameter against `0..=20`.
    pub fn validate(&self) -> MotionResult<()> {
        check_range("amplitude_x", self.amplitude_x, 0.0, LISSAJOUS_PARAM_MAX)?;
        check_range("amplitude_y", self.amplitude_y, 0.0, LISSAJOUS_PARAM_MAX)?;
        check_range("frequency_x", self.frequency_x, 0.0, LISSAJOUS_PARAM_MAX)?;
        check_range("frequency_y", self.frequency_y, 0.0, LISSAJOUS_PARAM_MAX)?;
        check_range("phase", self.phase, 0.0, LISSAJOUS_PARAM_MAX)
    }

    /// Position on the curve at time `t`.
    pub fn position_at(&self, t: f64) -> DVec3 {
        DVec3::new(
            self.amplitude_x * (self.frequency_x * t + self.phase).sin(),
            self.amplitude_y * (self.frequency_y * t).sin(),
            0.0,
        )
    }
}

/// A Lissajous curve together with its elapsed time.
///
/// # Example
///
/// ```rust
/// use solid_motion::{LissajousMotion, LissajousParams};
///
/// let mut motion = LissajousMotion::new(LissajousParams::default()).unwrap();
/// let p = motion.advance(0.0).unwrap();
/// assert!((p.x - 4.0 * 2.3f64.sin()).abs() < 1e-12);
/// assert_eq!(p.y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LissajousMotion {
    params: LissajousParams,
    elapsed: f64,
}

impl LissajousMotion {
    /// Creates a motion starting at `t = 0`.
    pub fn new(params: LissajousParams) -> MotionResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            elapsed: 0.0,
        })
    }

    /// Curve parameters.
    pub fn params(&self) -> &LissajousParams {
        &self.params
    }

    /// Time accumulated by [`advance`](Self::advance).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Adds `dt` to the elapsed time and returns the new position.
    pub fn advance(&mut self, dt: f64) -> MotionResult<DVec3> {
        check_time_step(dt)?;
        self.elapsed += dt;
        Ok(self.position())
    }

    /// Position at the current elapsed time.
    pub fn position(&self) -> DVec3 {
        self.params.position_at(self.elapsed)
    }

    /// Position at an arbitrary time without touching the state.
    pub fn position_at(&self, t: f64) -> DVec3 {
        self.params.position_at(t)
    }
}

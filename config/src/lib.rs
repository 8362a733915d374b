//! # Config Crate
//!
//! Centralized configuration constants for the combined solid mesh
//! workspace. All magic numbers and tunable parameters are defined here so
//! the mesh builder and the motion behaviors agree on their defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CONE_SEGMENTS, EPSILON, MIN_SEGMENTS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Segment defaults always describe a closed ring
//! assert!(DEFAULT_CONE_SEGMENTS >= MIN_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `const` items and one validated struct

pub mod constants;

#[cfg(test)]
mod tests;

//! # Solid Motion
//!
//! Frame-by-frame behaviour of the procedural sphere-and-cone object:
//! a Lissajous path, rate-limited turning toward a target, a facing color,
//! animated noise on the surface, and remote control through tool calls.
//!
//! ## Architecture
//!
//! ```text
//! ObjectController::initialize(builder, settings)
//!     │ builds the mesh, then wires up
//!     ├── LissajousMotion   position
//!     ├── RotateTowards     rotation
//!     ├── facing_color      color
//!     └── NoiseDisplacer    mesh deformation (optional)
//!
//! tick(dt, target) ──▶ FrameState
//! dispatch(controller, ToolCall) ──▶ ToolOutput
//! ```
//!
//! Nothing here renders; callers copy [`FrameState`] and
//! [`ObjectController::mesh`] into their own scene.

pub mod color;
pub mod controller;
pub mod displacement;
pub mod error;
pub mod lissajous;
pub mod rotation;
pub mod tools;

pub use color::{facing_color, Rgba};
pub use controller::{FrameState, MotionSettings, ObjectController};
pub use displacement::{DisplacementSettings, NoiseDisplacer};
pub use error::{MotionError, MotionResult};
pub use lissajous::{LissajousMotion, LissajousParams};
pub use rotation::{look_rotation, RotateTowards};
pub use tools::{dispatch, tool_definitions, ToolCall, ToolOutput};

//! # Object Controller
//!
//! Owns the generated mesh and every per-frame behaviour of the object.
//! Initialization happens in one call, so motion never starts against a
//! mesh that is still being built.
//!
//! ```text
//! initialize ──▶ Idle ──grab──▶ Grabbed ──release──▶ Idle
//!                  │                                   │
//!                  └──────── set_visible(false) ──▶ Hidden (frozen)
//! ```

use crate::color::{facing_color, Rgba};
use crate::displacement::{DisplacementSettings, NoiseDisplacer};
use crate::error::{check_range, check_time_step, MotionResult};
use crate::lissajous::{LissajousMotion, LissajousParams};
use crate::rotation::RotateTowards;
use config::constants::{DEFAULT_ANGULAR_SPEED_DEG, DEFAULT_OBJECT_SCALE};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use solid_mesh::{CombinedSolidMeshBuilder, TriangleMesh};
use tracing::{debug, info};

/// Runtime settings of a controlled object.
///
/// # Example
///
/// ```rust
/// use solid_motion::MotionSettings;
///
/// let settings = MotionSettings::from_json(r#"{ "angular_speed": 45.0 }"#).unwrap();
/// assert_eq!(settings.angular_speed, 45.0);
/// assert!(settings.displacement.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Path followed while not grabbed
    pub lissajous: LissajousParams,
    /// Turning speed in degrees per second
    pub angular_speed: f64,
    /// Uniform scale applied to the object
    pub object_scale: f64,
    /// Animated surface noise, if any
    pub displacement: Option<DisplacementSettings>,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            lissajous: LissajousParams::default(),
            angular_speed: DEFAULT_ANGULAR_SPEED_DEG,
            object_scale: DEFAULT_OBJECT_SCALE,
            displacement: None,
        }
    }
}

impl MotionSettings {
    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json(source: &str) -> MotionResult<Self> {
        let settings: Self = serde_json::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every setting.
    pub fn validate(&self) -> MotionResult<()> {
        self.lissajous.validate()?;
        check_range("angular_speed", self.angular_speed, 0.0, f64::MAX)?;
        check_range("object_scale", self.object_scale, f64::MIN_POSITIVE, f64::MAX)?;
        if let Some(displacement) = &self.displacement {
            displacement.validate()?;
        }
        Ok(())
    }
}

/// Everything a renderer needs to draw one frame of the object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameState {
    /// World position
    pub position: DVec3,
    /// World orientation; +Z is forward
    pub rotation: DQuat,
    /// Material color
    pub color: Rgba,
    /// Uniform scale
    pub scale: f64,
    /// Whether the object should be drawn
    pub visible: bool,
    /// Whether the mesh was re-deformed this frame
    pub displaced: bool,
}

/// State machine driving one sphere-and-cone object.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::CombinedSolidMeshBuilder;
/// use solid_motion::{MotionSettings, ObjectController};
///
/// let builder = CombinedSolidMeshBuilder::default();
/// let mut controller = ObjectController::initialize(&builder, MotionSettings::default()).unwrap();
/// let frame = controller.tick(1.0 / 60.0, Some(DVec3::new(0.0, 0.0, 5.0))).unwrap();
/// assert!(frame.visible);
/// assert_eq!(frame.scale, 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct ObjectController {
    mesh: TriangleMesh,
    motion: LissajousMotion,
    rotator: RotateTowards,
    displacer: Option<NoiseDisplacer>,
    target: Option<DVec3>,
    position: DVec3,
    rotation: DQuat,
    color: Rgba,
    scale: f64,
    elapsed: f64,
    visible: bool,
    grabbed: bool,
}

impl ObjectController {
    /// Builds the mesh, then sets up motion, turning, color and the optional
    /// displacer in that order.
    ///
    /// # Errors
    ///
    /// Invalid settings, or any mesh generation error.
    pub fn initialize(
        builder: &CombinedSolidMeshBuilder,
        settings: MotionSettings,
    ) -> MotionResult<Self> {
        settings.validate()?;
        let mesh = builder.build()?;

        let motion = LissajousMotion::new(settings.lissajous)?;
        let rotator = RotateTowards::new(settings.angular_speed)?;
        let displacer = settings
            .displacement
            .map(|d| NoiseDisplacer::new(&mesh, d))
            .transpose()?;
        let position = motion.position();

        info!(
            vertices = mesh.vertex_count(),
            displacement = displacer.is_some(),
            "object initialized"
        );

        Ok(Self {
            mesh,
            motion,
            rotator,
            displacer,
            target: None,
            position,
            rotation: DQuat::IDENTITY,
            color: facing_color(DVec3::Z, position, position),
            scale: settings.object_scale,
            elapsed: 0.0,
            visible: true,
            grabbed: false,
        })
    }

    /// Current (possibly displaced) mesh in object space.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Sets or clears the point the object turns toward.
    pub fn set_target(&mut self, target: Option<DVec3>) {
        self.target = target;
    }

    /// Point the object turns toward.
    pub fn target(&self) -> Option<DVec3> {
        self.target
    }

    /// Hands the object to the user: motion, turning and color freeze.
    pub fn grab(&mut self) {
        if !self.grabbed {
            self.grabbed = true;
            info!("object grabbed");
        }
    }

    /// Returns the object to its own motion.
    pub fn release(&mut self) {
        if self.grabbed {
            self.grabbed = false;
            info!("object released");
        }
    }

    /// Whether the object is held by the user.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Moves a grabbed object; ignored otherwise.
    pub fn move_to(&mut self, position: DVec3) {
        if self.grabbed {
            self.position = position;
        }
    }

    /// Turning speed in degrees per second.
    pub fn angular_speed(&self) -> f64 {
        self.rotator.angular_speed()
    }

    /// Changes the turning speed.
    pub fn set_angular_speed(&mut self, degrees_per_second: f64) -> MotionResult<()> {
        self.rotator.set_angular_speed(degrees_per_second)?;
        info!(angular_speed = degrees_per_second, "angular speed updated");
        Ok(())
    }

    /// Whether the object is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the object. Hidden objects do not advance.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            info!(visible, "visibility changed");
        }
    }

    /// Current frame without advancing.
    pub fn frame(&self, displaced: bool) -> FrameState {
        FrameState {
            position: self.position,
            rotation: self.rotation,
            color: self.color,
            scale: self.scale,
            visible: self.visible,
            displaced,
        }
    }

    /// Advances the object by `dt` seconds.
    ///
    /// A `Some` target replaces the stored one. While grabbed only the
    /// surface animation runs; while hidden nothing changes.
    ///
    /// # Errors
    ///
    /// Negative or non-finite `dt`.
    pub fn tick(&mut self, dt: f64, target_position: Option<DVec3>) -> MotionResult<FrameState> {
        check_time_step(dt)?;
        if target_position.is_some() {
            self.target = target_position;
        }
        if !self.visible {
            return Ok(self.frame(false));
        }

        self.elapsed += dt;

        if !self.grabbed {
            self.position = self.motion.advance(dt)?;
            if let Some(target) = self.target {
                self.rotation = self.rotator.step(self.rotation, self.position, target, dt)?;
                self.color = facing_color(self.rotation * DVec3::Z, self.position, target);
            }
        }

        let displaced = match &self.displacer {
            Some(displacer) => {
                displacer.apply(&mut self.mesh, self.elapsed)?;
                true
            }
            None => false,
        };

        debug!(elapsed = self.elapsed, grabbed = self.grabbed, "frame advanced");
        Ok(self.frame(displaced))
    }
}

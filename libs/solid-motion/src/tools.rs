//! # Tool Dispatch
//!
//! Remote control of an [`ObjectController`] through named function calls
//! with JSON arguments, as issued by a conversational assistant.
//!
//! Two tools are exposed:
//!
//! - `change_angular_speed` takes a number of degrees per second
//! - `control_visibility` takes a boolean
//!
//! Arguments may be the bare value (`45`), an object holding only the
//! declared parameter (`{"angularSpeed": 45}`) or either of those encoded
//! as a JSON string.

use crate::controller::ObjectController;
use crate::error::MotionResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Name of the tool changing the turning speed.
pub const CHANGE_ANGULAR_SPEED: &str = "change_angular_speed";

/// Name of the tool showing or hiding the object.
pub const CONTROL_VISIBILITY: &str = "control_visibility";

/// Parameter of [`CHANGE_ANGULAR_SPEED`].
const ANGULAR_SPEED_PARAM: &str = "angularSpeed";

/// Parameter of [`CONTROL_VISIBILITY`].
const VISIBILITY_PARAM: &str = "visibility";

/// A function call addressed to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub name: String,
    /// Tool arguments
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Creates a call from a name and its arguments.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Parses a call from JSON.
    pub fn from_json(source: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Result reported back to the caller.
///
/// Serializes as `{"success": bool, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Whether the call took effect
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

impl ToolOutput {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn error(message: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Error: {message}"),
        }
    }
}

/// Function declarations for the supported tools, in the JSON schema shape
/// chat completion APIs expect.
pub fn tool_definitions() -> Value {
    json!([
        {
            "type": "function",
            "name": CHANGE_ANGULAR_SPEED,
            "description": "Change how fast the object turns toward its target, in degrees per second.",
            "parameters": {
                "type": "object",
                "properties": { ANGULAR_SPEED_PARAM: { "type": "number" } },
                "required": [ANGULAR_SPEED_PARAM]
            }
        },
        {
            "type": "function",
            "name": CONTROL_VISIBILITY,
            "description": "Show or hide the object.",
            "parameters": {
                "type": "object",
                "properties": { VISIBILITY_PARAM: { "type": "boolean" } },
                "required": [VISIBILITY_PARAM]
            }
        }
    ])
}

/// Executes `call` against `controller`.
///
/// Never fails: unknown tools and bad arguments come back as
/// `success: false` with the reason in the message.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use solid_mesh::CombinedSolidMeshBuilder;
/// use solid_motion::{dispatch, MotionSettings, ObjectController, ToolCall};
///
/// let builder = CombinedSolidMeshBuilder::default();
/// let mut controller = ObjectController::initialize(&builder, MotionSettings::default()).unwrap();
/// let output = dispatch(&mut controller, &ToolCall::new("control_visibility", json!(false)));
/// assert!(output.success);
/// assert_eq!(output.message, "Object is now hidden");
/// assert!(!controller.is_visible());
/// ```
pub fn dispatch(controller: &mut ObjectController, call: &ToolCall) -> ToolOutput {
    let output = match call.name.as_str() {
        CHANGE_ANGULAR_SPEED => change_angular_speed(controller, &call.arguments),
        CONTROL_VISIBILITY => control_visibility(controller, &call.arguments),
        other => ToolOutput::error(format!("unknown tool `{other}`")),
    };

    if output.success {
        info!(tool = %call.name, "tool call applied");
    } else {
        warn!(tool = %call.name, message = %output.message, "tool call rejected");
    }
    output
}

fn change_angular_speed(controller: &mut ObjectController, arguments: &Value) -> ToolOutput {
    let speed = match scalar_argument::<f64>(arguments, ANGULAR_SPEED_PARAM) {
        Ok(speed) => speed,
        Err(err) => return ToolOutput::error(err),
    };
    match controller.set_angular_speed(speed) {
        Ok(()) => ToolOutput::ok(format!("Angular Velocity is now {speed}")),
        Err(err) => ToolOutput::error(err),
    }
}

fn control_visibility(controller: &mut ObjectController, arguments: &Value) -> ToolOutput {
    let visible = match scalar_argument::<bool>(arguments, VISIBILITY_PARAM) {
        Ok(visible) => visible,
        Err(err) => return ToolOutput::error(err),
    };
    controller.set_visible(visible);
    let status = if visible { "visible" } else { "hidden" };
    ToolOutput::ok(format!("Object is now {status}"))
}

/// Extracts the single scalar argument `name` of a tool call.
fn scalar_argument<T: DeserializeOwned>(arguments: &Value, name: &str) -> Result<T, String> {
    let decoded;
    let arguments = match arguments {
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(value) => {
                decoded = value;
                &decoded
            }
            Err(_) => arguments,
        },
        _ => arguments,
    };

    let value = match arguments {
        Value::Object(fields) if fields.len() > 1 => {
            return Err(format!("expected a single argument, got {}", fields.len()))
        }
        Value::Object(fields) => match fields.get(name) {
            Some(value) => value,
            None => return Err(format!("missing argument `{name}`")),
        },
        _ => arguments,
    };

    T::deserialize(value).map_err(|err| format!("invalid argument {value}: {err}"))
}

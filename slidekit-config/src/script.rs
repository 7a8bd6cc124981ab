//! Recorded input scripts replayed by the simulator.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "at_ms": 0,    "event": { "type": "pointer_down", "x": 200 } },
//!   { "at_ms": 40,   "event": { "type": "pointer_move", "x": 120 } },
//!   { "at_ms": 60,   "event": { "type": "pointer_up" } },
//!   { "at_ms": 900,  "event": { "type": "click_dot", "slide": 3 } },
//!   { "at_ms": 1200, "event": { "type": "resize", "width": 480 } }
//! ]
//! ```

use std::{fmt, fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Virtual time, in milliseconds since the gallery was initialized.
    pub at_ms: u64,
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerCancel,
    ClickLeft,
    ClickRight,
    /// Click the dot of the given slide.
    ClickDot { slide: usize },
    /// Change the container width and notify the gallery.
    Resize { width: f32 },
    /// Let time pass without input.
    Wait,
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::PointerDown { x } => write!(f, "pointer_down x={x}"),
            ScriptEvent::PointerMove { x } => write!(f, "pointer_move x={x}"),
            ScriptEvent::PointerUp => f.write_str("pointer_up"),
            ScriptEvent::PointerCancel => f.write_str("pointer_cancel"),
            ScriptEvent::ClickLeft => f.write_str("click_left"),
            ScriptEvent::ClickRight => f.write_str("click_right"),
            ScriptEvent::ClickDot { slide } => write!(f, "click_dot {slide}"),
            ScriptEvent::Resize { width } => write!(f, "resize w={width}"),
            ScriptEvent::Wait => f.write_str("wait"),
        }
    }
}

/// Parse a script, ordering steps by time. Steps sharing a timestamp keep
/// their written order.
pub fn parse_script(raw: &str) -> serde_json::Result<Vec<ScriptStep>> {
    let mut steps: Vec<ScriptStep> = serde_json::from_str(raw)?;
    steps.sort_by_key(|step| step.at_ms);
    Ok(steps)
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptStep>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&raw)
        .with_context(|| format!("invalid script {}", path.display()))
}

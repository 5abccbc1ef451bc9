//! Scripted input sessions.
//!
//! A replay script is a JSON array of steps fed to a [`Viewport`] in
//! order, for headless reproduction of navigation bugs and for driving the
//! viewport from tests:
//!
//! ```json
//! [
//!   { "Resize": { "width": 800, "height": 600 } },
//!   { "Input": { "CursorMoved": { "x": 400.0, "y": 300.0 } } },
//!   { "Input": { "MouseButton": { "button": "Right", "pressed": true } } },
//!   { "Input": { "MouseButton": { "button": "Right", "pressed": false } } },
//!   { "Key": "KeyA" },
//!   "Render"
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VistaError;
use crate::input::InputEvent;
use crate::render::{FrameStats, PaintSurface};
use crate::viewport::Viewport;

/// One step of a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReplayStep {
    /// Feed an input event.
    Input(InputEvent),
    /// Press a key (key code string).
    Key(String),
    /// Resize the viewport.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Render a frame.
    Render,
}

/// An ordered list of replay steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayScript {
    /// Steps in execution order.
    pub steps: Vec<ReplayStep>,
}

/// What happened while running a script.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReplaySummary {
    /// Steps executed.
    pub steps: usize,
    /// Steps that changed the camera.
    pub camera_changes: usize,
    /// Frames rendered.
    pub frames: usize,
    /// Stats of the last rendered frame.
    pub last_frame: Option<FrameStats>,
}

impl ReplayScript {
    /// Parse a script from JSON text.
    pub fn parse(json: &str) -> Result<Self, VistaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, VistaError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Run every step against `viewport`, painting onto `surface`.
    pub fn run(
        &self,
        viewport: &mut Viewport,
        surface: &mut dyn PaintSurface,
    ) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for step in &self.steps {
            let changed = match step {
                ReplayStep::Input(event) => viewport.handle_input(*event),
                ReplayStep::Key(key) => viewport.handle_key_press(key),
                ReplayStep::Resize { width, height } => {
                    viewport.resize(*width, *height);
                    false
                }
                ReplayStep::Render => {
                    summary.last_frame = Some(viewport.render(surface));
                    summary.frames += 1;
                    false
                }
            };
            summary.steps += 1;
            summary.camera_changes += usize::from(changed);
        }
        log::debug!(
            "replayed {} steps: {} camera changes, {} frames",
            summary.steps,
            summary.camera_changes,
            summary.frames
        );
        summary
    }
}

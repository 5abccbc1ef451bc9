use glam::{Vec2, Vec3};

use super::event::MouseButton;
use crate::camera::Transform;

/// Bookkeeping for one press-to-release cycle owned by the camera.
///
/// Only exists between a press no overlay control claimed and the matching
/// release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Button that opened the session.
    pub button: MouseButton,
    /// Scene position at press time.
    pub anchor_screen: Vec2,
    /// World point under the cursor at press time (primary button only).
    pub anchor_world: Option<Vec3>,
    /// Most recent pointer position, for incremental orbit deltas.
    pub last_screen: Vec2,
    /// Whether any move has been processed during this session.
    pub drag_occurred: bool,
}

impl DragSession {
    /// Open a session at `pos`, resolving the world anchor through the
    /// transform valid at press time when the primary button is used.
    #[must_use]
    pub fn begin(button: MouseButton, pos: Vec2, transform: &Transform) -> Self {
        let anchor_world =
            (button == MouseButton::Left).then(|| transform.scene_to_world(pos));
        Self {
            button,
            anchor_screen: pos,
            anchor_world,
            last_screen: pos,
            drag_occurred: false,
        }
    }

    /// Screen delta `last - pos` since the previous move; advances `last`.
    pub fn advance(&mut self, pos: Vec2) -> Vec2 {
        let delta = self.last_screen - pos;
        self.last_screen = pos;
        delta
    }

    /// Move the recorded screen positions by `offset` after the scene
    /// origin moved under them. The world anchor is unaffected.
    pub fn shift(&mut self, offset: Vec2) {
        self.anchor_screen += offset;
        self.last_screen += offset;
    }

    /// Whether the session ended without any drag.
    #[must_use]
    pub fn is_click(&self) -> bool {
        !self.drag_occurred
    }
}

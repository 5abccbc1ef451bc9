//! The viewport's interactive vocabulary.
//!
//! The [`InputProcessor`](crate::input::InputProcessor) decides what an
//! event means and emits a `ViewCommand`; the
//! [`Viewport`](super::Viewport) executes it against the camera and the
//! context-menu collaborator.

use glam::{Vec2, Vec3};

/// A camera or menu action decided by the interaction state machine.
///
/// Positions are scene coordinates (origin at the viewport center, y
/// down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Move the center so `anchor_world` sits under `cursor`.
    Pan {
        /// World point grabbed at press time.
        anchor_world: Vec3,
        /// Current pointer position.
        cursor: Vec2,
    },
    /// Rotate by a pointer delta (`last - current`).
    Orbit {
        /// Screen-space delta.
        delta: Vec2,
    },
    /// Zoom around the cursor.
    Zoom {
        /// Pointer position kept fixed.
        cursor: Vec2,
        /// Wheel delta.
        delta: f32,
    },
    /// Ask the context-menu collaborator to open at the cursor.
    OpenContextMenu {
        /// Pointer position.
        cursor: Vec2,
    },
    /// Restore the default camera pose.
    ResetView,
}

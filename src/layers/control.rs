use glam::Vec2;

use crate::input::MouseButton;

/// Input event as seen by overlay controls.
///
/// Pointer positions are in scene coordinates (origin at the viewport
/// center, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent<'a> {
    /// A mouse button went down.
    Press {
        /// Which button.
        button: MouseButton,
        /// Pointer position.
        pos: Vec2,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        pos: Vec2,
    },
    /// A mouse button went up.
    Release {
        /// Which button.
        button: MouseButton,
        /// Pointer position.
        pos: Vec2,
    },
    /// Wheel scroll.
    Scroll {
        /// Pointer position.
        pos: Vec2,
        /// Wheel delta.
        delta: f32,
    },
    /// A key was pressed.
    Key {
        /// Key code string, e.g. `"KeyA"`.
        key: &'a str,
        /// Whether shift is held.
        shift: bool,
    },
}

/// Interactive widget drawn over the viewport that sees input before the
/// camera does.
pub trait OverlayControl {
    /// Offer an event. Returning `true` claims it and suppresses default
    /// camera handling; a claimed press suppresses the camera until the
    /// matching release.
    fn offer(&mut self, event: &ControlEvent<'_>) -> bool;
}

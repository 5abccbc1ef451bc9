use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into [`Viewport::handle_input`](crate::Viewport::handle_input),
/// which offers them to overlay controls and then to the
/// [`InputProcessor`](super::InputProcessor).
///
/// # Example
///
/// ```
/// # use vista::{InputEvent, MouseButton, Options, Viewport};
/// let mut viewport = Viewport::new(800, 600, Options::default());
/// let _ = viewport.handle_input(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
/// let _ = viewport.handle_input(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in pixels from the left edge.
        x: f32,
        /// Vertical position in pixels from the top edge.
        y: f32,
    },
    /// Mouse button pressed or released at the current cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel at the current cursor position.
    Scroll {
        /// Wheel delta (positive = zoom out, negative = zoom in).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary (left) mouse button. Pans.
    Left,
    /// Secondary (right) mouse button. Orbits, or opens the context menu
    /// on a plain click.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

//! The interaction state machine.
//!
//! The `InputProcessor` owns all transient input state (held buttons, the
//! current drag session, modifier keys, cursor position) and the key-binding
//! map. It decides between pan, orbit, zoom, pass-through to an overlay
//! control and opening the context menu, and reports its decision as a
//! [`ViewCommand`] for the [`Viewport`](crate::Viewport) to execute.
//!
//! Whether an overlay control claimed an event is decided by the caller and
//! passed in as `claimed`; the processor only proceeds on `false`.

use glam::Vec2;

use super::drag::DragSession;
use super::event::MouseButton;
use super::keyboard::KeyAction;
use crate::camera::Transform;
use crate::options::KeybindingOptions;
use crate::viewport::ViewCommand;

/// What a camera drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Primary button: the world point under the cursor follows it.
    Pan,
    /// Secondary button: pitch and yaw follow pointer travel.
    Orbit,
}

/// Top-level interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No drag in progress. A pressed-but-not-yet-moved session is Idle.
    #[default]
    Idle,
    /// The camera is being dragged.
    Dragging(DragKind),
    /// An overlay control claimed the press; the camera ignores the
    /// pointer until every button is released.
    ChildClaimed,
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldButtons {
    left: bool,
    right: bool,
    middle: bool,
}

impl HeldButtons {
    fn set(&mut self, button: MouseButton, held: bool) {
        match button {
            MouseButton::Left => self.left = held,
            MouseButton::Right => self.right = held,
            MouseButton::Middle => self.middle = held,
        }
    }

    fn any(self) -> bool {
        self.left || self.right || self.middle
    }

    /// The single held button, if exactly one is held.
    fn only(self) -> Option<MouseButton> {
        match (self.left, self.right, self.middle) {
            (true, false, false) => Some(MouseButton::Left),
            (false, true, false) => Some(MouseButton::Right),
            (false, false, true) => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Converts pointer and keyboard events into [`ViewCommand`]s.
///
/// Positions passed in are scene coordinates (origin at the viewport
/// center, y down).
#[derive(Debug, Clone)]
pub struct InputProcessor {
    state: InteractionState,
    session: Option<DragSession>,
    buttons: HeldButtons,
    cursor: Vec2,
    shift_pressed: bool,
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InteractionState::Idle,
            session: None,
            buttons: HeldButtons::default(),
            cursor: Vec2::ZERO,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The active camera drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether the camera currently owns the pointer (a camera session is
    /// open). While it does, pointer events bypass overlay controls.
    #[must_use]
    pub fn owns_pointer(&self) -> bool {
        self.session.is_some()
    }

    /// Last known cursor position in scene coordinates.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Re-express the cached pointer state after the window → scene mapping
    /// moved by `offset`, so the next event without a preceding move still
    /// refers to the same window pixel.
    pub fn shift_scene(&mut self, offset: Vec2) {
        self.cursor += offset;
        if let Some(session) = self.session.as_mut() {
            session.shift(offset);
        }
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Update the shift modifier state.
    pub fn set_shift(&mut self, shift: bool) {
        self.shift_pressed = shift;
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Drop all button and drag state without producing any command.
    ///
    /// Used when the host loses pointer focus mid-drag.
    pub fn release_mouse_state(&mut self) {
        self.buttons = HeldButtons::default();
        self.session = None;
        self.state = InteractionState::Idle;
    }

    /// A button went down at `pos`.
    ///
    /// A claimed press hands the pointer to the overlay control until
    /// release. Otherwise a drag session opens; dragging itself starts
    /// lazily on the first move.
    pub fn press(
        &mut self,
        button: MouseButton,
        pos: Vec2,
        claimed: bool,
        transform: &Transform,
    ) -> Option<ViewCommand> {
        self.cursor = pos;
        self.buttons.set(button, true);

        if claimed || self.state == InteractionState::ChildClaimed {
            self.session = None;
            self.state = InteractionState::ChildClaimed;
            log::trace!("{button:?} press owned by overlay control");
            return None;
        }

        self.session = Some(DragSession::begin(button, pos, transform));
        self.state = InteractionState::Idle;
        None
    }

    /// The pointer moved to `pos`.
    pub fn motion(&mut self, pos: Vec2, claimed: bool) -> Option<ViewCommand> {
        self.cursor = pos;
        if claimed || self.state == InteractionState::ChildClaimed {
            return None;
        }
        let session = self.session.as_mut()?;

        let (kind, command) = match self.buttons.only()? {
            MouseButton::Left => {
                let anchor_world = session.anchor_world?;
                (
                    DragKind::Pan,
                    ViewCommand::Pan {
                        anchor_world,
                        cursor: pos,
                    },
                )
            }
            MouseButton::Right => (
                DragKind::Orbit,
                ViewCommand::Orbit {
                    delta: session.advance(pos),
                },
            ),
            MouseButton::Middle => return None,
        };

        session.drag_occurred = true;
        if self.state != InteractionState::Dragging(kind) {
            log::trace!("drag started: {kind:?}");
        }
        self.state = InteractionState::Dragging(kind);
        Some(command)
    }

    /// A button went up at `pos`.
    ///
    /// Releasing the secondary button without any intervening move opens
    /// the context menu. The drag session ends in every case.
    pub fn release(
        &mut self,
        button: MouseButton,
        pos: Vec2,
    ) -> Option<ViewCommand> {
        self.cursor = pos;
        self.buttons.set(button, false);

        if self.state == InteractionState::ChildClaimed {
            if !self.buttons.any() {
                self.state = InteractionState::Idle;
            }
            return None;
        }

        let session = self.session.take();
        self.state = InteractionState::Idle;
        let plain_click = session.is_some_and(|s| s.is_click());
        (button == MouseButton::Right && plain_click)
            .then_some(ViewCommand::OpenContextMenu { cursor: pos })
    }

    /// Wheel scroll at the current cursor position.
    pub fn scroll(&mut self, delta: f32, claimed: bool) -> Option<ViewCommand> {
        if claimed || self.state == InteractionState::ChildClaimed {
            return None;
        }
        Some(ViewCommand::Zoom {
            cursor: self.cursor,
            delta,
        })
    }

    /// A key was pressed and no overlay control consumed it.
    #[must_use]
    pub fn key_press(&self, key: &str, claimed: bool) -> Option<ViewCommand> {
        if claimed {
            return None;
        }
        match self.key_bindings.lookup(key, self.shift_pressed)? {
            KeyAction::OpenMenu => Some(ViewCommand::OpenContextMenu {
                cursor: self.cursor,
            }),
            KeyAction::ResetView => Some(ViewCommand::ResetView),
        }
    }
}

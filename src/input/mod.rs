//! Input handling: event types, the drag session record, and the
//! interaction state machine that turns pointer and keyboard events into
//! viewport commands.

/// Press-to-release drag bookkeeping.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// The interaction state machine.
pub mod processor;
/// Translation of winit window events.
#[cfg(feature = "viewer")]
pub mod window_events;

pub use drag::DragSession;
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::{DragKind, InputProcessor, InteractionState};

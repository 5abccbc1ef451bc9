//! Translation of winit window events into viewport input.
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if vista::input::window_events::dispatch(&mut self.viewport, &event) {
//!         self.window.request_redraw();
//!     }
//! }
//! ```

use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::InputEvent;
use crate::viewport::Viewport;

/// Wheel units per line step, matching the classic 120-per-notch wheel.
const LINE_DELTA_UNITS: f32 = 120.0;

/// Convert a pointer or modifier window event, if it is one.
#[must_use]
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            })
        }
        WindowEvent::MouseInput { state, button, .. } => match button {
            winit::event::MouseButton::Left
            | winit::event::MouseButton::Right
            | winit::event::MouseButton::Middle => Some(InputEvent::MouseButton {
                button: (*button).into(),
                pressed: *state == ElementState::Pressed,
            }),
            // Back/forward and other extra buttons do not navigate.
            _ => None,
        },
        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y * LINE_DELTA_UNITS,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
            };
            Some(InputEvent::Scroll { delta })
        }
        WindowEvent::ModifiersChanged(modifiers) => {
            Some(InputEvent::ModifiersChanged {
                shift: modifiers.state().shift_key(),
            })
        }
        _ => None,
    }
}

/// Key code string (`"KeyA"`, `"Home"`) of a key press, if it is one.
#[must_use]
pub fn key_press(event: &KeyEvent) -> Option<String> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Route a window event to `viewport`. Returns `true` if a repaint is
/// needed.
pub fn dispatch(viewport: &mut Viewport, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::Resized(size) => {
            viewport.resize(size.width, size.height);
            true
        }
        WindowEvent::KeyboardInput { event, .. } => {
            key_press(event).is_some_and(|key| viewport.handle_key_press(&key))
        }
        _ => translate(event)
            .is_some_and(|input| viewport.handle_input(input)),
    }
}

//! The viewport: one camera, its interaction state machine, the layers
//! attached to it, and the compositor that paints them.
//!
//! Everything here runs on one thread. The registry holds `Rc`/`Weak`
//! handles, so a `Viewport` is neither `Send` nor `Sync`; a host that
//! renders on a separate thread must hand it snapshots of
//! [`CameraState`] instead.

/// Commands produced by the interaction state machine.
pub mod command;
/// Pixel size and scene rectangle.
pub mod geometry;

use std::cell::RefCell;
use std::rc::Rc;

pub use command::ViewCommand;
pub use geometry::{SceneRect, ViewportGeometry};
use glam::{Vec2, Vec3};

use crate::camera::{CameraController, CameraState, Transform};
use crate::input::{InputEvent, InputProcessor, InteractionState};
use crate::layers::{
    AttachmentId, ControlEvent, DepthLayer, LayerRegistry, OverlayControl,
    ViewListener,
};
use crate::options::Options;
use crate::render::{Compositor, FrameStats, PaintSurface};

/// Where and on what a context menu was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuRequest {
    /// Pointer position in window pixels.
    pub window_pos: Vec2,
    /// Pointer position in scene coordinates.
    pub scene_pos: Vec2,
    /// World point on the screen plane under the pointer.
    pub world_pos: Vec3,
}

/// Collaborator that populates and shows the context menu.
///
/// Closures taking a `&MenuRequest` implement this directly.
pub trait ContextMenuHandler {
    /// Open the menu for `request`.
    fn open_menu(&mut self, request: &MenuRequest);
}

impl<F: FnMut(&MenuRequest)> ContextMenuHandler for F {
    fn open_menu(&mut self, request: &MenuRequest) {
        self(request);
    }
}

/// An interactive 3D view.
///
/// # Example
///
/// ```
/// # use vista::{InputEvent, MouseButton, Options, RecordingSurface, Viewport};
/// let mut viewport = Viewport::new(640, 480, Options::default());
/// let _ = viewport.handle_input(InputEvent::CursorMoved { x: 320.0, y: 240.0 });
/// let _ = viewport.handle_input(InputEvent::Scroll { delta: -120.0 });
///
/// let mut surface = RecordingSurface::new();
/// if viewport.take_redraw() {
///     let _ = viewport.render(&mut surface);
/// }
/// assert!(viewport.camera().scale > 100.0);
/// ```
pub struct Viewport {
    camera: CameraController,
    input: InputProcessor,
    registry: LayerRegistry,
    compositor: Compositor,
    geometry: ViewportGeometry,
    options: Options,
    menu: Option<Box<dyn ContextMenuHandler>>,
    needs_redraw: bool,
}

impl Viewport {
    /// Create a `width × height` viewport with a default camera pose.
    #[must_use]
    pub fn new(width: u32, height: u32, options: Options) -> Self {
        Self {
            camera: CameraController::new(options.camera.clone()),
            input: InputProcessor::new(options.keybindings.clone()),
            registry: LayerRegistry::new(),
            compositor: Compositor::new(),
            geometry: ViewportGeometry::new(width, height),
            options,
            menu: None,
            needs_redraw: true,
        }
    }

    /// Install the context-menu collaborator, replacing any previous one.
    pub fn set_menu_handler(&mut self, handler: impl ContextMenuHandler + 'static) {
        self.menu = Some(Box::new(handler));
    }

    // ── Accessors ──

    /// Current camera pose.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        self.camera.state()
    }

    /// Transform for the current camera pose.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.camera.transform()
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.input.state()
    }

    /// Viewport pixel size and scene rectangle.
    #[must_use]
    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The layer registry.
    #[must_use]
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.compositor.frame_count()
    }

    /// World point on the screen plane under a window pixel position.
    #[must_use]
    pub fn window_to_world(&self, window: Vec2) -> Vec3 {
        self.transform()
            .scene_to_world(self.geometry.map_to_scene(window))
    }

    /// Window pixel position of a world point.
    #[must_use]
    pub fn world_to_window(&self, world: Vec3) -> Vec2 {
        let screen = self.transform().world_to_screen(world);
        self.geometry.map_from_scene(screen.truncate())
    }

    // ── Mutation ──

    /// Replace the options. The camera pose is kept.
    pub fn set_options(&mut self, options: Options) {
        self.camera.set_options(options.camera.clone());
        self.input.set_key_bindings(options.keybindings.clone());
        self.options = options;
        self.needs_redraw = true;
    }

    /// Replace the camera pose (normalized into range).
    pub fn set_camera(&mut self, state: CameraState) {
        self.camera.set_state(state);
        self.view_changed();
    }

    /// Resize the viewport; the scene rectangle stays centered and the
    /// camera is unchanged.
    ///
    /// The cached cursor keeps pointing at the same window pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        let geometry = ViewportGeometry::new(width, height);
        let window = self.geometry.map_from_scene(Vec2::ZERO);
        self.input.shift_scene(geometry.map_to_scene(window));
        self.geometry = geometry;
        self.needs_redraw = true;
        log::debug!("viewport resized to {}x{}", self.geometry.width(), self.geometry.height());
    }

    /// Whether a repaint is pending; clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ── Attachments ──

    /// Attach a depth-image layer to the depth and paint broadcasts.
    pub fn attach_layer<L: DepthLayer + 'static>(
        &mut self,
        layer: &Rc<RefCell<L>>,
    ) -> AttachmentId {
        self.needs_redraw = true;
        self.registry.attach_layer(layer)
    }

    /// Attach an overlay control with first refusal on input.
    pub fn attach_control<C: OverlayControl + 'static>(
        &mut self,
        control: &Rc<RefCell<C>>,
    ) -> AttachmentId {
        self.registry.attach_control(control)
    }

    /// Attach a listener notified on every camera change.
    pub fn attach_listener<V: ViewListener + 'static>(
        &mut self,
        listener: &Rc<RefCell<V>>,
    ) -> AttachmentId {
        self.registry.attach_listener(listener)
    }

    /// Detach anything previously attached.
    pub fn detach(&mut self, id: AttachmentId) -> bool {
        let removed = self.registry.detach(id);
        self.needs_redraw |= removed;
        removed
    }

    // ── Input ──

    /// Process a platform-agnostic input event.
    ///
    /// Overlay controls see the event first unless a camera drag owns the
    /// pointer. Returns `true` if the camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let owns_pointer = self.input.owns_pointer();
        let command = match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = self.geometry.map_to_scene(Vec2::new(x, y));
                let claimed = !owns_pointer
                    && self.registry.offer(&ControlEvent::Move { pos });
                self.input.motion(pos, claimed)
            }
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => {
                let pos = self.input.cursor();
                let claimed = !owns_pointer
                    && self.registry.offer(&ControlEvent::Press { button, pos });
                let transform = self.camera.transform();
                self.input.press(button, pos, claimed, &transform)
            }
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => {
                let pos = self.input.cursor();
                if !owns_pointer {
                    let _ = self
                        .registry
                        .offer(&ControlEvent::Release { button, pos });
                }
                self.input.release(button, pos)
            }
            InputEvent::Scroll { delta } => {
                let pos = self.input.cursor();
                let claimed = !owns_pointer
                    && self.registry.offer(&ControlEvent::Scroll { pos, delta });
                self.input.scroll(delta, claimed)
            }
            InputEvent::ModifiersChanged { shift } => {
                self.input.set_shift(shift);
                None
            }
        };
        command.is_some_and(|command| self.execute(command))
    }

    /// Process a key press (`"KeyA"`, `"Home"`, …). Returns `true` if the
    /// camera changed.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let claimed = self.registry.offer(&ControlEvent::Key {
            key,
            shift: self.input.shift_pressed(),
        });
        self.input
            .key_press(key, claimed)
            .is_some_and(|command| self.execute(command))
    }

    /// Drop any in-progress drag without side effects.
    pub fn release_mouse_state(&mut self) {
        self.input.release_mouse_state();
    }

    /// Execute a command. Returns `true` if the camera changed.
    pub fn execute(&mut self, command: ViewCommand) -> bool {
        let changed = match command {
            ViewCommand::Pan {
                anchor_world,
                cursor,
            } => {
                self.camera.pan(anchor_world, cursor);
                true
            }
            ViewCommand::Orbit { delta } => {
                self.camera.orbit(delta);
                true
            }
            ViewCommand::Zoom { cursor, delta } => {
                self.camera.zoom_at(cursor, delta)
            }
            ViewCommand::OpenContextMenu { cursor } => {
                self.open_menu(cursor);
                false
            }
            ViewCommand::ResetView => {
                self.camera.reset();
                true
            }
        };
        if changed {
            self.view_changed();
        }
        changed
    }

    fn open_menu(&mut self, cursor: Vec2) {
        let request = MenuRequest {
            window_pos: self.geometry.map_from_scene(cursor),
            scene_pos: cursor,
            world_pos: self.camera.transform().scene_to_world(cursor),
        };
        match self.menu.as_mut() {
            Some(menu) => {
                log::debug!("opening context menu at {:?}", request.world_pos);
                menu.open_menu(&request);
            }
            None => log::debug!("context menu requested with no handler installed"),
        }
    }

    /// Request a repaint and tell listeners about the new matrix.
    fn view_changed(&mut self) {
        self.needs_redraw = true;
        let matrix = self.camera.transform().matrix();
        self.registry.notify(&matrix);
    }

    // ── Rendering ──

    /// Composite one frame onto `surface` and clear the repaint flag.
    pub fn render(&mut self, surface: &mut dyn PaintSurface) -> FrameStats {
        self.needs_redraw = false;
        let transform = self.camera.transform();
        self.compositor.render(
            surface,
            &transform,
            &mut self.registry,
            &self.options.colors,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Mat4;

    use super::*;
    use crate::input::MouseButton;

    fn viewport() -> Viewport {
        Viewport::new(800, 600, Options::default())
    }

    fn menu_counter(viewport: &mut Viewport) -> Rc<RefCell<Vec<MenuRequest>>> {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        viewport.set_menu_handler(move |req: &MenuRequest| sink.borrow_mut().push(*req));
        opened
    }

    fn at(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn right_click_opens_menu_once() {
        let mut vp = viewport();
        let opened = menu_counter(&mut vp);
        let _ = vp.handle_input(at(500.0, 200.0));
        let _ = vp.handle_input(button(MouseButton::Right, true));
        let _ = vp.handle_input(button(MouseButton::Right, false));

        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].window_pos, Vec2::new(500.0, 200.0));
        assert_eq!(opened[0].scene_pos, Vec2::new(100.0, -100.0));
        assert!(opened[0].world_pos.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn right_drag_orbits_without_menu() {
        let mut vp = viewport();
        let opened = menu_counter(&mut vp);
        let _ = vp.handle_input(at(400.0, 300.0));
        let _ = vp.handle_input(button(MouseButton::Right, true));
        assert!(vp.handle_input(at(430.0, 280.0)));
        let _ = vp.handle_input(button(MouseButton::Right, false));

        assert!(opened.borrow().is_empty());
        let cam = vp.camera();
        assert!((cam.pitch + 0.2).abs() < 1e-5);
        assert!((cam.yaw - 0.3).abs() < 1e-5);
    }

    #[test]
    fn left_drag_keeps_grabbed_point_under_cursor() {
        let mut vp = viewport();
        vp.set_camera(CameraState {
            pitch: -0.6,
            yaw: 2.0,
            ..CameraState::default()
        });
        let _ = vp.handle_input(at(300.0, 350.0));
        let grabbed = vp.window_to_world(Vec2::new(300.0, 350.0));
        let _ = vp.handle_input(button(MouseButton::Left, true));
        for (x, y) in [(320.0, 340.0), (500.0, 100.0), (10.0, 590.0)] {
            assert!(vp.handle_input(at(x, y)));
            let window = vp.world_to_window(grabbed);
            assert!(window.abs_diff_eq(Vec2::new(x, y), 1e-2), "{window}");
        }
        let _ = vp.handle_input(button(MouseButton::Left, false));
        assert_eq!(vp.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn wheel_zoom_keeps_point_under_cursor() {
        let mut vp = viewport();
        let cursor = Vec2::new(650.0, 120.0);
        let _ = vp.handle_input(at(cursor.x, cursor.y));
        let fixed = vp.window_to_world(cursor);
        assert!(vp.handle_input(InputEvent::Scroll { delta: -240.0 }));
        assert!(vp.camera().scale > 100.0);
        assert!(vp.world_to_window(fixed).abs_diff_eq(cursor, 1e-2));
    }

    #[test]
    fn shift_a_opens_menu() {
        let mut vp = viewport();
        let opened = menu_counter(&mut vp);
        assert!(!vp.handle_key_press("KeyA"));
        assert!(opened.borrow().is_empty());
        let _ = vp.handle_input(InputEvent::ModifiersChanged { shift: true });
        assert!(!vp.handle_key_press("KeyA"));
        assert_eq!(opened.borrow().len(), 1);
    }

    #[test]
    fn reset_key_restores_pose() {
        let mut vp = viewport();
        let _ = vp.handle_input(InputEvent::Scroll { delta: 300.0 });
        assert!(vp.handle_key_press("Home"));
        assert_eq!(*vp.camera(), CameraState::default());
    }

    #[test]
    fn listeners_see_every_camera_change() {
        struct Last(Option<Mat4>, usize);
        impl ViewListener for Last {
            fn view_changed(&mut self, matrix: &Mat4) {
                self.0 = Some(*matrix);
                self.1 += 1;
            }
        }

        let mut vp = viewport();
        let listener = Rc::new(RefCell::new(Last(None, 0)));
        let _ = vp.attach_listener(&listener);
        let _ = vp.handle_input(InputEvent::Scroll { delta: 10.0 });
        let _ = vp.handle_input(button(MouseButton::Right, true));
        let _ = vp.handle_input(at(10.0, 10.0));

        let last = listener.borrow();
        assert_eq!(last.1, 2);
        assert_eq!(last.0, Some(vp.transform().matrix()));
    }

    #[test]
    fn redraw_flag_tracks_changes() {
        let mut vp = viewport();
        assert!(vp.take_redraw());
        assert!(!vp.take_redraw());
        let _ = vp.handle_input(at(1.0, 1.0));
        assert!(!vp.take_redraw());
        let _ = vp.handle_input(InputEvent::Scroll { delta: 1.0 });
        assert!(vp.take_redraw());
        vp.resize(100, 100);
        assert!(vp.take_redraw());
    }

    #[test]
    fn resize_recenters_scene_without_touching_camera() {
        let mut vp = viewport();
        let before = *vp.camera();
        vp.resize(1024, 768);
        assert_eq!(*vp.camera(), before);
        assert_eq!(vp.geometry().scene_rect().x, -512.0);
        assert_eq!(vp.geometry().scene_rect().y, -384.0);
        assert_eq!(vp.world_to_window(Vec3::ZERO), Vec2::new(512.0, 384.0));
    }

    #[test]
    fn resize_keeps_cursor_on_same_window_pixel() {
        let mut vp = viewport();
        let opened = menu_counter(&mut vp);
        let _ = vp.handle_input(at(500.0, 200.0));
        vp.resize(400, 400);
        let _ = vp.handle_input(button(MouseButton::Right, true));
        let _ = vp.handle_input(button(MouseButton::Right, false));

        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].window_pos, Vec2::new(500.0, 200.0));
        assert_eq!(opened[0].scene_pos, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn pan_after_resize_keeps_grabbed_point_under_cursor() {
        let mut vp = viewport();
        let _ = vp.handle_input(at(500.0, 200.0));
        vp.resize(400, 400);
        let grabbed = vp.window_to_world(Vec2::new(500.0, 200.0));
        let _ = vp.handle_input(button(MouseButton::Left, true));
        assert!(vp.handle_input(at(501.0, 200.0)));
        let window = vp.world_to_window(grabbed);
        assert!(window.abs_diff_eq(Vec2::new(501.0, 200.0), 1e-2), "{window}");
    }

    #[test]
    fn resize_mid_orbit_does_not_jump() {
        let mut vp = viewport();
        let _ = vp.handle_input(at(400.0, 300.0));
        let _ = vp.handle_input(button(MouseButton::Right, true));
        vp.resize(200, 100);
        assert!(vp.handle_input(at(410.0, 300.0)));
        assert!((vp.camera().yaw - 0.1).abs() < 1e-5);
        assert!(vp.camera().pitch.abs() < 1e-6);
    }

    #[test]
    fn orbit_stays_in_range_under_wild_input() {
        let mut vp = viewport();
        let _ = vp.handle_input(button(MouseButton::Right, true));
        for i in 0..500 {
            let t = i as f32;
            let _ = vp.handle_input(at((t * 97.0) % 5000.0 - 2000.0, (t * 61.0) % 3000.0 - 900.0));
            let cam = vp.camera();
            assert!((-PI..=0.0).contains(&cam.pitch));
            assert!(cam.yaw > -PI && cam.yaw <= PI);
        }
    }
}

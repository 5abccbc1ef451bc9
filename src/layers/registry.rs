use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Mat4;
use rustc_hash::FxHashMap;

use super::control::{ControlEvent, OverlayControl};
use super::depth::DepthLayer;

/// Handle returned by every `attach_*` call, used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(u64);

/// Observer notified with the new matrix whenever the camera changes.
pub trait ViewListener {
    /// Called after every camera mutation.
    fn view_changed(&mut self, matrix: &Mat4);
}

type Shared<T> = Weak<RefCell<T>>;

/// Non-owning associations between a viewport and the layers, controls
/// and listeners attached to it.
///
/// Layers carry no ordering guarantee. Controls are polled in attachment
/// order and the first to claim an event wins.
#[derive(Default)]
pub struct LayerRegistry {
    next_id: u64,
    layers: FxHashMap<AttachmentId, Shared<dyn DepthLayer>>,
    controls: Vec<(AttachmentId, Shared<dyn OverlayControl>)>,
    listeners: Vec<(AttachmentId, Shared<dyn ViewListener>)>,
}

impl LayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> AttachmentId {
        let id = AttachmentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Subscribe a depth-image layer to the depth-query and paint
    /// broadcasts.
    pub fn attach_layer<L: DepthLayer + 'static>(
        &mut self,
        layer: &Rc<RefCell<L>>,
    ) -> AttachmentId {
        let shared: Rc<RefCell<dyn DepthLayer>> =
            Rc::<RefCell<L>>::clone(layer);
        let id = self.allocate_id();
        let _ = self.layers.insert(id, Rc::downgrade(&shared));
        log::debug!("attached depth layer {id:?}");
        id
    }

    /// Give an overlay control first refusal on input events, after every
    /// control attached before it.
    pub fn attach_control<C: OverlayControl + 'static>(
        &mut self,
        control: &Rc<RefCell<C>>,
    ) -> AttachmentId {
        let shared: Rc<RefCell<dyn OverlayControl>> =
            Rc::<RefCell<C>>::clone(control);
        let id = self.allocate_id();
        self.controls.push((id, Rc::downgrade(&shared)));
        log::debug!("attached overlay control {id:?}");
        id
    }

    /// Register a listener for camera changes.
    pub fn attach_listener<V: ViewListener + 'static>(
        &mut self,
        listener: &Rc<RefCell<V>>,
    ) -> AttachmentId {
        let shared: Rc<RefCell<dyn ViewListener>> =
            Rc::<RefCell<V>>::clone(listener);
        let id = self.allocate_id();
        self.listeners.push((id, Rc::downgrade(&shared)));
        id
    }

    /// Remove an attachment of any kind. Returns `false` if the id was not
    /// attached (or its target was already dropped and pruned).
    pub fn detach(&mut self, id: AttachmentId) -> bool {
        if self.layers.remove(&id).is_some() {
            log::debug!("detached depth layer {id:?}");
            return true;
        }
        let before = self.controls.len() + self.listeners.len();
        self.controls.retain(|(cid, _)| *cid != id);
        self.listeners.retain(|(lid, _)| *lid != id);
        before != self.controls.len() + self.listeners.len()
    }

    /// Number of live depth layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.values().filter(|w| w.strong_count() > 0).count()
    }

    /// Number of live overlay controls.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.controls
            .iter()
            .filter(|(_, w)| w.strong_count() > 0)
            .count()
    }

    /// Strong handles to every live layer for the duration of one frame,
    /// ordered by attachment. Dropped layers are pruned.
    pub fn live_layers(
        &mut self,
    ) -> Vec<(AttachmentId, Rc<RefCell<dyn DepthLayer>>)> {
        self.layers.retain(|_, w| w.strong_count() > 0);
        let mut live: Vec<_> = self
            .layers
            .iter()
            .filter_map(|(id, w)| w.upgrade().map(|layer| (*id, layer)))
            .collect();
        live.sort_by_key(|(id, _)| *id);
        live
    }

    /// Poll controls in attachment order until one claims the event.
    pub fn offer(&mut self, event: &ControlEvent<'_>) -> bool {
        self.controls.retain(|(_, w)| w.strong_count() > 0);
        for (id, control) in &self.controls {
            let Some(control) = control.upgrade() else {
                continue;
            };
            let Ok(mut control) = control.try_borrow_mut() else {
                log::warn!("overlay control {id:?} is busy; skipping");
                continue;
            };
            if control.offer(event) {
                log::trace!("event claimed by control {id:?}: {event:?}");
                return true;
            }
        }
        false
    }

    /// Notify every live listener of a new view matrix.
    pub fn notify(&mut self, matrix: &Mat4) {
        self.listeners.retain(|(_, w)| w.strong_count() > 0);
        for (id, listener) in &self.listeners {
            let Some(listener) = listener.upgrade() else {
                continue;
            };
            let Ok(mut listener) = listener.try_borrow_mut() else {
                log::warn!("view listener {id:?} is busy; skipping");
                continue;
            };
            listener.view_changed(matrix);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::layers::{DepthRange, LayerError};

    struct FlatLayer;

    impl DepthLayer for FlatLayer {
        fn report_depth(
            &mut self,
            _matrix: &Mat4,
        ) -> Result<DepthRange, LayerError> {
            Ok(DepthRange::new(0.0, 0.0))
        }

        fn paint(
            &mut self,
            _matrix: &Mat4,
            _depth: DepthRange,
        ) -> Result<(), LayerError> {
            Ok(())
        }
    }

    struct Claimer {
        claims: bool,
        seen: usize,
    }

    impl OverlayControl for Claimer {
        fn offer(&mut self, _event: &ControlEvent<'_>) -> bool {
            self.seen += 1;
            self.claims
        }
    }

    fn claimer(claims: bool) -> Rc<RefCell<Claimer>> {
        Rc::new(RefCell::new(Claimer { claims, seen: 0 }))
    }

    const MOVE: ControlEvent<'static> = ControlEvent::Move { pos: Vec2::ZERO };

    #[test]
    fn first_claiming_control_wins() {
        let mut registry = LayerRegistry::new();
        let a = claimer(false);
        let b = claimer(true);
        let c = claimer(true);
        let _ = registry.attach_control(&a);
        let _ = registry.attach_control(&b);
        let _ = registry.attach_control(&c);

        assert!(registry.offer(&MOVE));
        assert_eq!(a.borrow().seen, 1);
        assert_eq!(b.borrow().seen, 1);
        assert_eq!(c.borrow().seen, 0);
    }

    #[test]
    fn unclaimed_events_visit_every_control() {
        let mut registry = LayerRegistry::new();
        let a = claimer(false);
        let b = claimer(false);
        let _ = registry.attach_control(&a);
        let _ = registry.attach_control(&b);

        assert!(!registry.offer(&MOVE));
        assert_eq!(a.borrow().seen, 1);
        assert_eq!(b.borrow().seen, 1);
    }

    #[test]
    fn dropped_attachments_are_pruned() {
        let mut registry = LayerRegistry::new();
        let layer = Rc::new(RefCell::new(FlatLayer));
        let _ = registry.attach_layer(&layer);
        let control = claimer(true);
        let _ = registry.attach_control(&control);
        assert_eq!(registry.layer_count(), 1);
        assert_eq!(registry.control_count(), 1);

        drop(layer);
        drop(control);
        assert!(registry.live_layers().is_empty());
        assert!(!registry.offer(&MOVE));
        assert_eq!(registry.layer_count(), 0);
        assert_eq!(registry.control_count(), 0);
    }

    #[test]
    fn detach_removes_only_the_target() {
        let mut registry = LayerRegistry::new();
        let first = Rc::new(RefCell::new(FlatLayer));
        let second = Rc::new(RefCell::new(FlatLayer));
        let first_id = registry.attach_layer(&first);
        let second_id = registry.attach_layer(&second);

        assert!(registry.detach(first_id));
        assert!(!registry.detach(first_id));
        let live: Vec<_> =
            registry.live_layers().into_iter().map(|(id, _)| id).collect();
        assert_eq!(live, vec![second_id]);
    }

    #[test]
    fn busy_or_dropped_listeners_are_skipped() {
        struct Last(Option<Mat4>);
        impl ViewListener for Last {
            fn view_changed(&mut self, matrix: &Mat4) {
                self.0 = Some(*matrix);
            }
        }

        let mut registry = LayerRegistry::new();
        let busy = Rc::new(RefCell::new(Last(None)));
        let dropped = Rc::new(RefCell::new(Last(None)));
        let live = Rc::new(RefCell::new(Last(None)));
        let _ = registry.attach_listener(&busy);
        let _ = registry.attach_listener(&dropped);
        let _ = registry.attach_listener(&live);
        drop(dropped);

        let shifted = Mat4::from_translation(Vec3::X);
        {
            let _held = busy.borrow_mut();
            registry.notify(&shifted);
        }
        assert_eq!(busy.borrow().0, None);
        assert_eq!(live.borrow().0, Some(shifted));
        assert_eq!(registry.listeners.len(), 2);
    }

    #[test]
    fn detach_control_and_listener() {
        struct Counter(usize);
        impl ViewListener for Counter {
            fn view_changed(&mut self, _matrix: &Mat4) {
                self.0 += 1;
            }
        }

        let mut registry = LayerRegistry::new();
        let control = claimer(true);
        let control_id = registry.attach_control(&control);
        let counter = Rc::new(RefCell::new(Counter(0)));
        let listener_id = registry.attach_listener(&counter);

        registry.notify(&Mat4::IDENTITY);
        assert_eq!(counter.borrow().0, 1);

        assert!(registry.detach(control_id));
        assert!(registry.detach(listener_id));
        assert!(!registry.offer(&MOVE));
        registry.notify(&Mat4::IDENTITY);
        assert_eq!(counter.borrow().0, 1);
    }
}

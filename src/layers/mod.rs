//! Layer registry: depth-image layers, overlay controls and view listeners
//! attached to a viewport.
//!
//! The registry never owns what it tracks. Attachments are held as
//! [`Weak`](std::rc::Weak) references, so dropping the last strong handle
//! outside the viewport silently removes the attachment at the next
//! broadcast.

/// Overlay controls with first refusal on input events.
pub mod control;
/// Depth-image layer contract and depth ranges.
pub mod depth;
/// The attachment registry itself.
pub mod registry;

pub use control::{ControlEvent, OverlayControl};
pub use depth::{DepthLayer, DepthRange, LayerError};
pub use registry::{AttachmentId, LayerRegistry, ViewListener};

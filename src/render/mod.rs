//! Per-frame compositing: the native paint bracket, the depth-image layer
//! broadcast, and the axis overlay.

/// Axis overlay geometry and draw ordering.
pub mod axes;
/// Depth query and paint broadcast over attached layers.
pub mod compositor;
/// Paint surface contract, the scoped native-paint guard, and a recording
/// surface.
pub mod surface;

pub use axes::{axis_overlay, Axis, AxisSegment};
pub use compositor::{Compositor, FrameStats};
pub use surface::{NativePaintScope, PaintOp, PaintSurface, RecordingSurface, Stroke};

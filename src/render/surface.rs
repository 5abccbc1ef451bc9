use glam::Vec2;

/// Stroke style for overlay lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// RGBA color.
    pub color: [f32; 4],
    /// Width in screen pixels.
    pub width: f32,
}

/// The native rendering surface a viewport paints into.
///
/// Native painting (clearing and layer painting) is bracketed by
/// [`begin_native_paint`](Self::begin_native_paint) and
/// [`end_native_paint`](Self::end_native_paint); overlay lines are drawn
/// outside the bracket. Use [`NativePaintScope`] rather than calling the
/// bracket methods directly.
pub trait PaintSurface {
    /// Enter native painting.
    fn begin_native_paint(&mut self);
    /// Clear the color buffer to `color` and reset the depth buffer.
    fn clear(&mut self, color: [f32; 4]);
    /// Leave native painting (buffer swap / state restore).
    fn end_native_paint(&mut self);
    /// Draw a 2D line in scene coordinates.
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

/// Scoped native-paint bracket.
///
/// Entering calls `begin_native_paint`; dropping calls `end_native_paint`,
/// on every exit path including early returns and unwinding.
pub struct NativePaintScope<'a> {
    surface: &'a mut dyn PaintSurface,
}

impl<'a> NativePaintScope<'a> {
    /// Enter native painting on `surface`.
    pub fn begin(surface: &'a mut dyn PaintSurface) -> Self {
        surface.begin_native_paint();
        Self { surface }
    }

    /// The surface, for use inside the bracket.
    pub fn surface(&mut self) -> &mut dyn PaintSurface {
        &mut *self.surface
    }
}

impl Drop for NativePaintScope<'_> {
    fn drop(&mut self) {
        self.surface.end_native_paint();
    }
}

/// One recorded surface operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// `begin_native_paint`
    Begin,
    /// `clear`
    Clear([f32; 4]),
    /// `end_native_paint`
    End,
    /// `draw_line`
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke used.
        stroke: Stroke,
    },
}

/// Surface that records every operation instead of drawing.
///
/// Used by the replay tool and for headless inspection of frames.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    /// Empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Recorded overlay lines, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Stroke)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            PaintOp::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    /// Forget everything recorded.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl PaintSurface for RecordingSurface {
    fn begin_native_paint(&mut self) {
        self.ops.push(PaintOp::Begin);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.ops.push(PaintOp::Clear(color));
    }

    fn end_native_paint(&mut self) {
        self.ops.push(PaintOp::End);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.ops.push(PaintOp::Line { from, to, stroke });
    }
}

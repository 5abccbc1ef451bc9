use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

use super::axes::draw_axes;
use super::surface::{NativePaintScope, PaintSurface};
use crate::camera::Transform;
use crate::layers::{DepthLayer, DepthRange, LayerError, LayerRegistry};
use crate::options::ColorOptions;

/// Summary of one composited frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Depth range accumulated over every layer that reported.
    pub depth: DepthRange,
    /// Layers that painted successfully.
    pub layers_painted: usize,
    /// Layers whose depth report or paint failed this frame.
    pub layers_failed: usize,
}

/// Drives the per-frame render pass.
///
/// Inside a [`NativePaintScope`]: clear, query every layer's depth under
/// the current matrix, then have every layer paint with that matrix and
/// the accumulated range. The axis overlay is drawn after the scope
/// closes. A layer returning an error is logged and left out of the frame.
/// A panicking layer ends the whole frame: the scope still closes, then the
/// panic propagates, so later layers and the axis overlay are not drawn.
#[derive(Debug, Default)]
pub struct Compositor {
    frames: u64,
}

impl Compositor {
    /// Create a compositor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Render one frame.
    pub fn render(
        &mut self,
        surface: &mut dyn PaintSurface,
        transform: &Transform,
        registry: &mut LayerRegistry,
        colors: &ColorOptions,
    ) -> FrameStats {
        let matrix = transform.matrix();
        let layers = registry.live_layers();
        let mut stats = FrameStats::default();

        {
            let mut scope = NativePaintScope::begin(surface);
            scope.surface().clear(colors.background);

            let mut reported = Vec::with_capacity(layers.len());
            for (id, layer) in &layers {
                match query_depth(layer, &matrix) {
                    Ok(range) => {
                        stats.depth = stats.depth.union(range);
                        reported.push((*id, layer));
                    }
                    Err(e) => {
                        log::warn!("layer {id:?} depth query skipped: {e}");
                        stats.layers_failed += 1;
                    }
                }
            }

            for (id, layer) in reported {
                match paint_layer(layer, &matrix, stats.depth) {
                    Ok(()) => stats.layers_painted += 1,
                    Err(e) => {
                        log::warn!("layer {id:?} paint skipped: {e}");
                        stats.layers_failed += 1;
                    }
                }
            }
        }

        draw_axes(surface, transform, colors);
        self.frames += 1;
        log::trace!(
            "frame {}: {} painted, {} failed, depth [{}, {}]",
            self.frames,
            stats.layers_painted,
            stats.layers_failed,
            stats.depth.zmin,
            stats.depth.zmax
        );
        stats
    }
}

fn query_depth(
    layer: &Rc<RefCell<dyn DepthLayer>>,
    matrix: &Mat4,
) -> Result<DepthRange, LayerError> {
    layer
        .try_borrow_mut()
        .map_err(|_| LayerError::new("layer is busy"))?
        .report_depth(matrix)
}

fn paint_layer(
    layer: &Rc<RefCell<dyn DepthLayer>>,
    matrix: &Mat4,
    depth: DepthRange,
) -> Result<(), LayerError> {
    layer
        .try_borrow_mut()
        .map_err(|_| LayerError::new("layer is busy"))?
        .paint(matrix, depth)
}

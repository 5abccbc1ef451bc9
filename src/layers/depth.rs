use std::fmt;

use glam::Mat4;

/// Closed depth interval `[zmin, zmax]` in screen-space Z.
///
/// [`DepthRange::EMPTY`] (`[+∞, -∞]`) is the identity for
/// [`union`](Self::union).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    /// Nearest depth.
    pub zmin: f32,
    /// Farthest depth.
    pub zmax: f32,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl DepthRange {
    /// Range containing nothing.
    pub const EMPTY: Self = Self {
        zmin: f32::INFINITY,
        zmax: f32::NEG_INFINITY,
    };

    /// Range spanning `zmin..=zmax`.
    #[must_use]
    pub fn new(zmin: f32, zmax: f32) -> Self {
        Self { zmin, zmax }
    }

    /// Whether no depth has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zmin > self.zmax
    }

    /// Smallest range covering both inputs.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            zmin: self.zmin.min(other.zmin),
            zmax: self.zmax.max(other.zmax),
        }
    }
}

/// Failure reported by a depth-image layer during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerError {
    message: String,
}

impl LayerError {
    /// Error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer failed: {}", self.message)
    }
}

impl std::error::Error for LayerError {}

/// An independently owned image layer composited by the viewport.
///
/// Every frame the viewport first asks each attached layer for the depth
/// it occupies under the current matrix, then asks each one to paint with
/// the same matrix and the depth range accumulated over all layers, so
/// layers can blend and occlude consistently.
pub trait DepthLayer {
    /// Depth interval this layer covers under `matrix`.
    fn report_depth(&mut self, matrix: &Mat4) -> Result<DepthRange, LayerError>;

    /// Paint into the native surface using `matrix` and the frame-wide
    /// depth range.
    fn paint(&mut self, matrix: &Mat4, depth: DepthRange)
        -> Result<(), LayerError>;
}

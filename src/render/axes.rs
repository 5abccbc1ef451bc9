use glam::{Vec2, Vec3};

use crate::camera::Transform;
use crate::options::ColorOptions;
use crate::render::surface::{PaintSurface, Stroke};

/// World coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// +X
    X,
    /// +Y
    Y,
    /// +Z
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Overlay color for this axis.
    #[must_use]
    pub fn color(self, colors: &ColorOptions) -> [f32; 4] {
        match self {
            Self::X => colors.axis_x,
            Self::Y => colors.axis_y,
            Self::Z => colors.axis_z,
        }
    }
}

/// One axis of the overlay in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    /// Which axis.
    pub axis: Axis,
    /// Transformed world origin.
    pub origin: Vec3,
    /// Transformed unit endpoint; `tip.z` decides draw order.
    pub tip: Vec3,
}

/// The three axis segments under `transform`, sorted by transformed Z
/// ascending, i.e. in draw order.
///
/// There is no depth buffer for the overlay; drawing in this order lets
/// later (larger Z) segments paint over earlier ones. Ties keep X, Y, Z
/// order.
#[must_use]
pub fn axis_overlay(transform: &Transform) -> [AxisSegment; 3] {
    let origin = transform.world_to_screen(Vec3::ZERO);
    let mut segments = Axis::ALL.map(|axis| AxisSegment {
        axis,
        origin,
        tip: transform.world_to_screen(axis.unit()),
    });
    segments.sort_by(|a, b| a.tip.z.total_cmp(&b.tip.z));
    segments
}

/// Draw the axis overlay onto `surface`.
pub(crate) fn draw_axes(
    surface: &mut dyn PaintSurface,
    transform: &Transform,
    colors: &ColorOptions,
) {
    for segment in axis_overlay(transform) {
        surface.draw_line(
            Vec2::new(segment.origin.x, segment.origin.y),
            Vec2::new(segment.tip.x, segment.tip.y),
            Stroke {
                color: segment.axis.color(colors),
                width: colors.axis_width,
            },
        );
    }
}

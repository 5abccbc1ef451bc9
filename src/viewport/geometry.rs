use glam::Vec2;

/// Visible scene rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// Pixel size of the viewport and the scene rectangle kept centered on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    width: u32,
    height: u32,
}

impl ViewportGeometry {
    /// Geometry for a `width × height` viewport. Zero sizes are raised
    /// to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The scene rectangle `(-w/2, -h/2, w, h)`.
    #[must_use]
    pub fn scene_rect(&self) -> SceneRect {
        let (w, h) = (self.width as f32, self.height as f32);
        SceneRect {
            x: -w / 2.0,
            y: -h / 2.0,
            width: w,
            height: h,
        }
    }

    /// Map a window pixel position to scene coordinates.
    #[must_use]
    pub fn map_to_scene(&self, window: Vec2) -> Vec2 {
        let rect = self.scene_rect();
        window + Vec2::new(rect.x, rect.y)
    }

    /// Map a scene position back to window pixels.
    #[must_use]
    pub fn map_from_scene(&self, scene: Vec2) -> Vec2 {
        let rect = self.scene_rect();
        scene - Vec2::new(rect.x, rect.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_rect_is_centered() {
        let g = ViewportGeometry::new(800, 600);
        assert_eq!(
            g.scene_rect(),
            SceneRect {
                x: -400.0,
                y: -300.0,
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(g.map_to_scene(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(g.map_to_scene(Vec2::ZERO), Vec2::new(-400.0, -300.0));
        assert_eq!(
            g.map_from_scene(Vec2::new(10.0, -20.0)),
            Vec2::new(410.0, 280.0)
        );
    }

    #[test]
    fn zero_size_is_clamped() {
        let g = ViewportGeometry::new(0, 0);
        assert_eq!((g.width(), g.height()), (1, 1));
    }
}

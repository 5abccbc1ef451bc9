use serde::{Deserialize, Serialize};

/// Colors for the cleared background and the axis overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGBA clear color for the native paint pass.
    pub background: [f32; 4],
    /// RGBA color of the X axis.
    pub axis_x: [f32; 4],
    /// RGBA color of the Y axis.
    pub axis_y: [f32; 4],
    /// RGBA color of the Z axis.
    pub axis_z: [f32; 4],
    /// Axis stroke width in screen pixels.
    pub axis_width: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            axis_x: [0.93, 0.33, 0.33, 1.0],
            axis_y: [0.45, 0.82, 0.35, 1.0],
            axis_z: [0.35, 0.55, 0.95, 1.0],
            axis_width: 2.0,
        }
    }
}

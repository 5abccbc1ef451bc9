use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Navigation tuning for pan, orbit and zoom.
pub struct CameraOptions {
    /// Zoom factor of a freshly constructed or reset view.
    #[schemars(title = "Initial Scale", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub default_scale: f32,
    /// Wheel zoom base: each unit of wheel delta scales by `zoom_base^-delta`.
    #[schemars(title = "Zoom Base", range(min = 1.0001, max = 1.01), extend("step" = 0.0001))]
    pub zoom_base: f32,
    /// Radians of orbit per pixel of pointer travel.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub orbit_sensitivity: f32,
    /// Smallest scale a zoom step may reach.
    #[schemars(skip)]
    pub min_scale: f32,
    /// Largest scale a zoom step may reach.
    #[schemars(skip)]
    pub max_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            default_scale: 100.0,
            zoom_base: 1.001,
            orbit_sensitivity: 0.01,
            min_scale: 1e-4,
            max_scale: 1e7,
        }
    }
}

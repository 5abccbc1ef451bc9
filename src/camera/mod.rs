//! Camera system for the scene viewport.
//!
//! Provides the orthographic pan/orbit/zoom camera, the world ↔ screen
//! transform derived from it, and the controller that applies navigation
//! updates while keeping the camera invariants intact.

/// Camera controller applying pan, orbit and zoom updates.
pub mod controller;
/// Camera state record and angle helpers.
pub mod core;
/// World ↔ screen transform and GPU uniform packing.
pub mod transform;

pub use controller::CameraController;
pub use core::CameraState;
pub use transform::{Transform, ViewUniform};

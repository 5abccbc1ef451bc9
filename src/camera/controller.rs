use glam::{Vec2, Vec3};

use super::core::{clamp_pitch, wrap_angle, CameraState};
use super::transform::Transform;
use crate::options::CameraOptions;

/// Owns the [`CameraState`] of one viewport and applies navigation updates
/// to it.
///
/// Pan and zoom both keep the world point under the cursor fixed on
/// screen; orbit clamps pitch and wraps yaw.
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    options: CameraOptions,
}

impl CameraController {
    /// Controller with a fresh camera at `options.default_scale`.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        Self {
            state: CameraState::with_scale(options.default_scale),
            options,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Navigation tuning in effect.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the navigation tuning. The current pose is kept.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }

    /// Replace the pose, normalizing pitch, yaw and scale into range.
    pub fn set_state(&mut self, state: CameraState) {
        let mut normalized = CameraState::with_scale(state.scale);
        normalized.set_pitch(state.pitch);
        normalized.set_yaw(state.yaw);
        if state.center.is_finite() {
            normalized.center = state.center;
        }
        self.state = normalized;
    }

    /// Transform for the current pose.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::from_camera(&self.state)
    }

    /// Move the center so that `anchor_world` lands under `cursor`.
    pub fn pan(&mut self, anchor_world: Vec3, cursor: Vec2) {
        let under_cursor = self.transform().scene_to_world(cursor);
        let center = self.state.center + anchor_world - under_cursor;
        if center.is_finite() {
            self.state.center = center;
        }
    }

    /// Rotate by a screen-space pointer delta (`last - current`).
    pub fn orbit(&mut self, delta: Vec2) {
        let k = self.options.orbit_sensitivity;
        self.state.pitch = clamp_pitch(self.state.pitch - k * delta.y);
        self.state.yaw = wrap_angle(self.state.yaw - k * delta.x);
    }

    /// Zoom by a wheel delta around `cursor`, keeping the world point under
    /// it fixed.
    ///
    /// A step whose raw result is NaN, non-positive or infinite is rejected
    /// and leaves the camera untouched. Otherwise the new scale is clamped
    /// to `[min_scale, max_scale]`. Returns whether anything changed.
    pub fn zoom_at(&mut self, cursor: Vec2, delta: f32) -> bool {
        let Some(scale) = self.zoomed_scale(delta) else {
            log::warn!(
                "rejected zoom step (delta {delta}, scale {})",
                self.state.scale
            );
            return false;
        };
        if scale == self.state.scale {
            return false;
        }
        let before = self.transform().scene_to_world(cursor);
        self.state.scale = scale;
        let after = self.transform().scene_to_world(cursor);
        let center = self.state.center + before - after;
        if center.is_finite() {
            self.state.center = center;
        }
        true
    }

    fn zoomed_scale(&self, delta: f32) -> Option<f32> {
        let candidate =
            self.state.scale * self.options.zoom_base.powf(-delta);
        if !candidate.is_finite() || candidate <= 0.0 {
            return None;
        }
        let (lo, hi) = self.scale_bounds();
        Some(candidate.clamp(lo, hi))
    }

    /// Scale guard bounds, repaired if the options are inverted or
    /// non-positive.
    fn scale_bounds(&self) -> (f32, f32) {
        let lo = if self.options.min_scale.is_finite()
            && self.options.min_scale > 0.0
        {
            self.options.min_scale
        } else {
            f32::MIN_POSITIVE
        };
        let hi = if self.options.max_scale.is_finite() {
            self.options.max_scale.max(lo)
        } else {
            f32::MAX
        };
        (lo, hi)
    }

    /// Restore the default pose.
    pub fn reset(&mut self) {
        self.state = CameraState::with_scale(self.options.default_scale);
    }
}

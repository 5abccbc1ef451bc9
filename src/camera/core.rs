use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default zoom factor for a freshly constructed view.
pub const DEFAULT_SCALE: f32 = 100.0;

/// Orthographic camera pose: zoom, two rotation angles and the world-space
/// point mapped to the screen origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Screen units per world unit. Always positive and finite.
    pub scale: f32,
    /// Rotation about the screen-horizontal axis, in `[-π, 0]`.
    pub pitch: f32,
    /// Rotation about the vertical axis, in `(-π, π]`.
    pub yaw: f32,
    /// World-space point mapped to the screen origin.
    pub center: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }
}

impl CameraState {
    /// Camera at the origin with no rotation and the given zoom factor.
    ///
    /// Non-positive or non-finite scales fall back to [`DEFAULT_SCALE`].
    #[must_use]
    pub fn with_scale(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            DEFAULT_SCALE
        };
        Self {
            scale,
            pitch: 0.0,
            yaw: 0.0,
            center: Vec3::ZERO,
        }
    }

    /// Set the pitch, clamping it to `[-π, 0]`.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = clamp_pitch(pitch);
    }

    /// Set the yaw, wrapping it into `(-π, π]`.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_angle(yaw);
    }

    /// Whether every field satisfies the camera invariants.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite()
            && self.scale > 0.0
            && (-PI..=0.0).contains(&self.pitch)
            && self.yaw > -PI
            && self.yaw <= PI
            && self.center.is_finite()
    }
}

/// Clamp a pitch angle to `[-π, 0]`. NaN collapses to 0.
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    if pitch.is_nan() {
        return 0.0;
    }
    pitch.clamp(-PI, 0.0)
}

/// Wrap an angle into `(-π, π]`. Non-finite input collapses to 0.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fresh_view() {
        let cam = CameraState::default();
        assert_eq!(cam.scale, 100.0);
        assert_eq!(cam.pitch, 0.0);
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.center, Vec3::ZERO);
        assert!(cam.is_valid());
    }

    #[test]
    fn invalid_scale_falls_back_to_default() {
        assert_eq!(CameraState::with_scale(0.0).scale, DEFAULT_SCALE);
        assert_eq!(CameraState::with_scale(-3.0).scale, DEFAULT_SCALE);
        assert_eq!(CameraState::with_scale(f32::NAN).scale, DEFAULT_SCALE);
        assert_eq!(CameraState::with_scale(2.5).scale, 2.5);
    }

    #[test]
    fn pitch_clamps_instead_of_wrapping() {
        assert_eq!(clamp_pitch(1.0), 0.0);
        assert_eq!(clamp_pitch(-4.0), -PI);
        assert_eq!(clamp_pitch(-1.0), -1.0);
        assert_eq!(clamp_pitch(f32::NAN), 0.0);
    }

    #[test]
    fn wrap_angle_stays_in_half_open_range() {
        for i in -2000..2000 {
            let a = i as f32 * 0.037;
            let w = wrap_angle(a);
            assert!(w > -PI && w <= PI, "{a} wrapped to {w}");
        }
        assert_eq!(wrap_angle(-PI), PI);
        assert_eq!(wrap_angle(PI), PI);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert_eq!(wrap_angle(f32::INFINITY), 0.0);
    }
}

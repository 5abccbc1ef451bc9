//! World ↔ screen transform derived from a [`CameraState`].
//!
//! The matrix is rebuilt from the camera on demand; nothing here is cached
//! beyond the lifetime of a single [`Transform`] value.

use glam::{Mat4, Vec2, Vec3};

use super::core::CameraState;
use crate::layers::DepthRange;

/// Forward and inverse view matrices for one camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
    inverse: Mat4,
}

impl Transform {
    /// Build the world → screen transform for a camera pose.
    ///
    /// Operations are listed in the order they act on a world point:
    /// translate by `-center`, rotate by `yaw` about world Z, rotate by
    /// `pitch` about X, then scale by `(scale, -scale, scale)` so that
    /// world-up becomes screen-down.
    #[must_use]
    pub fn from_camera(camera: &CameraState) -> Self {
        let matrix = view_matrix(camera);
        Self {
            matrix,
            inverse: matrix.inverse(),
        }
    }

    /// The world → screen matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// The screen → world matrix.
    #[must_use]
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    /// Map a world-space point into screen space (z carries depth).
    #[must_use]
    pub fn world_to_screen(&self, p: Vec3) -> Vec3 {
        self.matrix.transform_point3(p)
    }

    /// Map a screen-space point (with depth) back into world space.
    #[must_use]
    pub fn screen_to_world(&self, p: Vec3) -> Vec3 {
        self.inverse.transform_point3(p)
    }

    /// Map a point on the screen plane (depth 0) into world space.
    #[must_use]
    pub fn scene_to_world(&self, p: Vec2) -> Vec3 {
        self.screen_to_world(p.extend(0.0))
    }
}

/// Build the world → screen matrix for a camera pose.
#[must_use]
pub fn view_matrix(camera: &CameraState) -> Mat4 {
    Mat4::from_scale(Vec3::new(camera.scale, -camera.scale, camera.scale))
        * Mat4::from_rotation_x(camera.pitch)
        * Mat4::from_rotation_z(camera.yaw)
        * Mat4::from_translation(-camera.center)
}

/// GPU uniform holding the view matrices and the frame's depth range.
///
/// Layers that upload to GPU buffers can write this directly with
/// `bytemuck::cast_slice(&[uniform])`.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    /// World → screen matrix.
    pub view: [[f32; 4]; 4],
    /// Screen → world matrix.
    pub inverse: [[f32; 4]; 4],
    /// Accumulated `[zmin, zmax]` for the frame.
    pub depth: [f32; 2],
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl ViewUniform {
    /// Pack a transform and depth range.
    #[must_use]
    pub fn new(transform: &Transform, depth: DepthRange) -> Self {
        Self {
            view: transform.matrix().to_cols_array_2d(),
            inverse: transform.inverse().to_cols_array_2d(),
            depth: [depth.zmin, depth.zmax],
            _pad: [0.0; 2],
        }
    }
}

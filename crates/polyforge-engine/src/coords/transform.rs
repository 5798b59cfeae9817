use glam::{Mat4, Vec3};

/// Model matrix applied to every vertex of a draw.
///
/// Column-major, matching WGSL `mat4x4<f32>`. Only rotation and uniform scale
/// are ever encoded; the translation column stays `(0, 0, 0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform(pub Mat4);

impl Transform {
    pub const IDENTITY: Transform = Transform(Mat4::IDENTITY);

    /// See [`build_transform`].
    #[inline]
    pub fn new(angle_x: f32, angle_y: f32, scale: f32) -> Self {
        Transform(build_transform(angle_x, angle_y, scale))
    }

    #[inline]
    pub fn matrix(self) -> Mat4 {
        self.0
    }

    /// The 16 floats in upload order (column-major).
    #[inline]
    pub fn to_cols_array(self) -> [f32; 16] {
        self.0.to_cols_array()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for Transform {
    fn from(m: Mat4) -> Self {
        Transform(m)
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.0
    }
}

/// Builds `Scale * RotY * RotX`.
///
/// Applied to a column vector the X rotation happens first, then Y, then the
/// uniform scale. Angles are in radians.
pub fn build_transform(angle_x: f32, angle_y: f32, scale: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(scale))
        * Mat4::from_rotation_y(angle_y)
        * Mat4::from_rotation_x(angle_x)
}

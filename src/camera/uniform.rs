use glam::{DMat4, DVec3, Mat4};

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices for the draw pipeline.
///
/// Matrices are emitted relative to the eye (the view translation is
/// zeroed) so that planet-scale coordinates survive the narrowing to `f32`.
/// Vertex positions must be offset by `-eye` on the CPU or via
/// `eye_high`/`eye_low` in the shader.
pub struct CameraUniform {
    /// Eye-relative view matrix (rotation only).
    pub view: [[f32; 4]; 4],
    /// Projection matrix for the live clip range.
    pub projection: [[f32; 4]; 4],
    /// `projection · view` using the eye-relative view.
    pub view_proj: [[f32; 4]; 4],
    /// High part of the eye position split into two floats.
    pub eye_high: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Low part (remainder) of the eye position.
    pub eye_low: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye_high: [0.0; 3],
            fovy: 35.0,
            eye_low: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_from(&mut self, camera: &Camera) {
        let mut view = camera.view();
        view.w_axis = glam::DVec4::W;
        let view_proj = camera.projection() * view;

        self.view = narrow(view);
        self.projection = narrow(camera.projection());
        self.view_proj = narrow(view_proj);
        (self.eye_high, self.eye_low) = split(camera.eye());
        self.fovy = camera.view_angle() as f32;
        self.aspect = camera.aspect() as f32;
    }
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update_from(camera);
        uniform
    }
}

fn narrow(m: DMat4) -> [[f32; 4]; 4] {
    m.as_mat4().to_cols_array_2d()
}

/// Split a double-precision position into `high + low` single-precision
/// parts.
fn split(p: DVec3) -> ([f32; 3], [f32; 3]) {
    let high = p.as_vec3();
    let low = (p - high.as_dvec3()).as_vec3();
    (high.to_array(), low.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_eye_relative() {
        let mut camera = Camera::new(35.0, (800, 600), 0.1, 1.0e7);
        let eye = DVec3::new(6_378_137.25, 10.5, -3.0);
        camera.set(eye, DVec3::ZERO, DVec3::Y);

        let uniform = CameraUniform::from(&camera);
        assert_eq!(uniform.view[3], [0.0, 0.0, 0.0, 1.0]);

        let high = DVec3::from(uniform.eye_high.map(f64::from));
        let low = DVec3::from(uniform.eye_low.map(f64::from));
        assert!((high + low - eye).length() < 1e-6);
    }

    #[test]
    fn uniform_casts_to_bytes() {
        let uniform = CameraUniform::new();
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), size_of::<CameraUniform>());
        assert_eq!(bytes.len(), 3 * 64 + 32);
    }
}

//! Visual-side state types shared with the front-ends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets.

use glam::{Mat4, Vec3};

/// Drawable area in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(fov_deg: f32, aspect: f32, znear: f32, zfar: f32, eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fov_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// Point the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Light arriving from `position` towards the origin, like a sun.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }

    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// The textured sphere. It sits at the origin and is never rotated.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Body {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_aspect_and_emptiness() {
        assert_eq!(Viewport::new(1600, 800).aspect(), 2.0);
        assert!(Viewport::new(0, 800).is_empty());
        assert!(Viewport::new(10, 0).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }

    #[test]
    fn look_at_keeps_eye() {
        let mut cam = Camera::perspective(75.0, 1.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 30.0));
        cam.look_at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(cam.target, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn target_projects_to_screen_centre() {
        let mut cam = Camera::perspective(75.0, 1.5, 0.1, 1000.0, Vec3::new(0.0, 0.0, 30.0));
        cam.look_at(Vec3::new(4.0, -3.0, 8.0));
        let clip = cam.view_proj() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "ndc {ndc:?}");
    }

    #[test]
    fn light_points_back_at_its_position() {
        let light = DirectionalLight {
            position: Vec3::new(5.0, 3.0, 5.0),
            color: Vec3::ONE,
            intensity: 1.0,
        };
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
        assert!(light.direction().dot(Vec3::new(5.0, 3.0, 5.0)) > 0.0);
    }
}

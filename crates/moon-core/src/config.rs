use crate::constants::*;
use crate::marker::MarkerGrowth;
use crate::state::DirectionalLight;
use glam::Vec3;

/// Everything the scene needs to build itself. `Default` uses the values in
/// [`crate::constants`]; front-ends override individual fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub body_radius: f32,
    pub body_width_segments: u32,
    pub body_height_segments: u32,
    pub texture_path: String,

    pub marker_altitude: f32,
    pub marker_radius: f32,
    pub marker_segments: u32,
    pub marker_color: [f32; 4],
    /// Draw the disc from both sides. When false only the face pointing at
    /// the body centre is drawn.
    pub marker_double_sided: bool,
    pub growth: MarkerGrowth,

    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_distance: f32,

    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    pub light: DirectionalLight,
    pub ambient: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            body_radius: BODY_RADIUS,
            body_width_segments: BODY_WIDTH_SEGMENTS,
            body_height_segments: BODY_HEIGHT_SEGMENTS,
            texture_path: BODY_TEXTURE_PATH.to_string(),
            marker_altitude: MARKER_ALTITUDE,
            marker_radius: MARKER_RADIUS,
            marker_segments: MARKER_SEGMENTS,
            marker_color: MARKER_COLOR,
            marker_double_sided: MARKER_DOUBLE_SIDED,
            growth: MarkerGrowth::default(),
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_distance: CAMERA_DISTANCE,
            damping_factor: CONTROLS_DAMPING_FACTOR,
            rotate_speed: CONTROLS_ROTATE_SPEED,
            zoom_speed: CONTROLS_ZOOM_SPEED,
            min_distance: CONTROLS_MIN_DISTANCE,
            max_distance: CONTROLS_MAX_DISTANCE,
            light: DirectionalLight {
                position: light_position_vec3(),
                color: Vec3::from(LIGHT_COLOR),
                intensity: LIGHT_INTENSITY,
            },
            ambient: AMBIENT_LEVEL,
        }
    }
}

impl SceneConfig {
    /// Radius of the shell markers and the camera focus sit on.
    pub fn marker_shell_radius(&self) -> f32 {
        self.body_radius + self.marker_altitude
    }

    pub fn initial_eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.camera_distance)
    }
}

use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Body
pub const BODY_RADIUS: f32 = 10.0;
pub const BODY_WIDTH_SEGMENTS: u32 = 32;
pub const BODY_HEIGHT_SEGMENTS: u32 = 32;
pub const BODY_TEXTURE_PATH: &str = "moon_texture.jpg";

// Markers
pub const MARKER_ALTITUDE: f32 = 0.5; // height above the surface, avoids z-fighting with the body
pub const MARKER_RADIUS: f32 = 1.0;
pub const MARKER_SEGMENTS: u32 = 32;
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const MARKER_DOUBLE_SIDED: bool = true;

// Growth animation (per rendered frame)
pub const MARKER_SCALE_START: f32 = 0.1;
pub const MARKER_SCALE_STEP: f32 = 0.05;
pub const MARKER_SCALE_END: f32 = 2.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 30.0; // initial eye distance along +Z

// Orbit controls
pub const CONTROLS_DAMPING_FACTOR: f32 = 0.25;
pub const CONTROLS_ROTATE_SPEED: f32 = 1.0;
pub const CONTROLS_ZOOM_SPEED: f32 = 1.0;
pub const CONTROLS_MIN_DISTANCE: f32 = 1.0;
pub const CONTROLS_MAX_DISTANCE: f32 = 500.0;

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [5.0, 3.0, 5.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const AMBIENT_LEVEL: f32 = 0.0;

pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn light_position_vec3() -> Vec3 {
    Vec3::from(LIGHT_POSITION)
}

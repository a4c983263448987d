//! Scene construction and per-frame scene state.
//!
//! [`SceneHandle`] owns the one-time build: it starts unbuilt, the first
//! [`SceneHandle::build`] creates camera, controls, light and body, and later
//! calls return the same state untouched. [`SceneState`] is what the ticker
//! tasks and the renderers work on.

use crate::config::SceneConfig;
use crate::controls::OrbitControls;
use crate::error::SceneError;
use crate::marker::Marker;
use crate::state::{Body, Camera, DirectionalLight, Viewport};
use crate::ticker::TickStatus;
use glam::{Mat4, Vec3};

/// Per-frame data handed to a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub body_model: Mat4,
    /// Unit vector towards the light.
    pub light_direction: Vec3,
    pub light_radiance: Vec3,
    pub ambient: f32,
    pub marker: Option<MarkerInstance>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerInstance {
    pub model: Mat4,
    pub color: [f32; 4],
    pub double_sided: bool,
}

#[derive(Debug)]
pub struct SceneHandle {
    config: SceneConfig,
    state: Option<SceneState>,
}

impl SceneHandle {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Build the scene for `viewport`. Only the first call does any work;
    /// later calls return the existing state and ignore `viewport`.
    pub fn build(&mut self, viewport: Viewport) -> Result<&mut SceneState, SceneError> {
        if self.state.is_some() {
            log::debug!("scene already built; ignoring build request");
        } else {
            if viewport.is_empty() {
                return Err(SceneError::EmptyViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
            self.state = Some(SceneState::new(self.config.clone(), viewport));
            log::info!(
                "scene built: {}x{} body r={} camera z={}",
                viewport.width,
                viewport.height,
                self.config.body_radius,
                self.config.camera_distance
            );
        }
        self.state_mut()
    }

    pub fn is_built(&self) -> bool {
        self.state.is_some()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> Result<&SceneState, SceneError> {
        self.state.as_ref().ok_or(SceneError::SceneNotInitialized)
    }

    pub fn state_mut(&mut self) -> Result<&mut SceneState, SceneError> {
        self.state.as_mut().ok_or(SceneError::SceneNotInitialized)
    }
}

#[derive(Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub controls: OrbitControls,
    pub light: DirectionalLight,
    pub body: Body,
    config: SceneConfig,
    viewport: Viewport,
    marker: Option<Marker>,
    frames_rendered: u64,
}

impl SceneState {
    fn new(config: SceneConfig, viewport: Viewport) -> Self {
        let camera = Camera::perspective(
            config.camera_fov_deg,
            viewport.aspect(),
            config.camera_near,
            config.camera_far,
            config.initial_eye(),
        );
        let body = Body {
            radius: config.body_radius,
            width_segments: config.body_width_segments,
            height_segments: config.body_height_segments,
        };
        Self {
            camera,
            controls: OrbitControls::new(&config),
            light: config.light,
            body,
            config,
            viewport,
            marker: None,
            frames_rendered: 0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a new drawable size. Zero-sized updates (minimised windows) are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// Aim both the camera and the orbit controls at `target`, immediately.
    pub fn focus(&mut self, target: Vec3) {
        self.camera.look_at(target);
        self.controls.set_target(target);
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Install a new marker, replacing (and force-removing) any previous one.
    pub fn spawn_marker(&mut self, id: u64, position: Vec3) -> &Marker {
        if let Some(old) = self.remove_marker() {
            log::debug!("marker {} replaced by {}", old.id(), id);
        }
        self.marker.insert(Marker::new(id, position, &self.config))
    }

    /// Detach the active marker, ending its animation.
    pub fn remove_marker(&mut self) -> Option<Marker> {
        let mut marker = self.marker.take()?;
        marker.force_remove();
        Some(marker)
    }

    /// Growth step for marker `id`. Finishes when the marker is gone or has
    /// been replaced, and detaches the marker once it is fully grown.
    pub fn grow_marker(&mut self, id: u64) -> TickStatus {
        let Some(marker) = self.marker.as_mut().filter(|m| m.id() == id) else {
            return TickStatus::Done;
        };
        let status = marker.grow();
        if status == TickStatus::Done {
            self.marker = None;
            log::debug!("marker {id} finished growing and was removed");
        }
        status
    }

    /// Render-loop task: ease the orbit controls and count the frame.
    pub fn advance_frame(&mut self) -> TickStatus {
        self.controls.update(&mut self.camera);
        self.frames_rendered += 1;
        TickStatus::Continue
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_proj()
    }

    pub fn body_model(&self) -> Mat4 {
        self.body.model_matrix()
    }

    pub fn render_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            view_proj: self.view_proj(),
            eye: self.camera.eye,
            body_model: self.body_model(),
            light_direction: self.light.direction(),
            light_radiance: self.light.radiance(),
            ambient: self.config.ambient,
            marker: self.marker.as_ref().map(|m| MarkerInstance {
                model: m.model_matrix(),
                color: m.color,
                double_sided: m.double_sided,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuilt_handle_reports_not_initialized() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        assert!(!handle.is_built());
        assert!(matches!(handle.state(), Err(SceneError::SceneNotInitialized)));
        assert!(matches!(
            handle.state_mut(),
            Err(SceneError::SceneNotInitialized)
        ));
    }

    #[test]
    fn build_uses_configured_camera() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        let state = handle.build(Viewport::new(1200, 600)).unwrap();
        assert_eq!(state.camera.eye, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(state.camera.aspect, 2.0);
        assert!((state.camera.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(state.camera.znear, 0.1);
        assert_eq!(state.camera.zfar, 1000.0);
        assert!(state.controls.enable_damping);
        assert_eq!(state.controls.damping_factor, 0.25);
        assert_eq!(state.body.radius, 10.0);
        assert_eq!(state.light.position, Vec3::new(5.0, 3.0, 5.0));
        assert!(state.active_marker().is_none());
    }

    #[test]
    fn empty_viewport_is_fatal() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        assert_eq!(
            handle.build(Viewport::new(0, 480)).err(),
            Some(SceneError::EmptyViewport {
                width: 0,
                height: 480
            })
        );
        assert!(!handle.is_built());
    }

    #[test]
    fn second_build_is_a_no_op() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        handle.build(Viewport::new(800, 600)).unwrap().focus(Vec3::ONE);
        let again = handle.build(Viewport::new(10, 10)).unwrap();
        assert_eq!(again.camera.target, Vec3::ONE);
        assert_eq!(again.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn resize_ignores_zero_sizes() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        let state = handle.build(Viewport::new(800, 600)).unwrap();
        state.resize(Viewport::new(0, 0));
        assert_eq!(state.viewport(), Viewport::new(800, 600));
        state.resize(Viewport::new(400, 400));
        assert_eq!(state.camera.aspect, 1.0);
    }

    #[test]
    fn stale_growth_task_finishes_without_touching_new_marker() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        let state = handle.build(Viewport::new(800, 600)).unwrap();
        state.spawn_marker(1, Vec3::new(0.0, 0.0, 10.5));
        state.spawn_marker(2, Vec3::new(0.0, 10.5, 0.0));
        assert_eq!(state.grow_marker(1), TickStatus::Done);
        let marker = state.active_marker().unwrap();
        assert_eq!(marker.id(), 2);
        assert_eq!(marker.steps_taken(), 0);
    }

    #[test]
    fn snapshot_carries_marker() {
        let mut handle = SceneHandle::new(SceneConfig::default());
        let state = handle.build(Viewport::new(800, 600)).unwrap();
        assert!(state.render_snapshot().marker.is_none());
        state.spawn_marker(1, Vec3::new(0.0, 0.0, 10.5));
        let snap = state.render_snapshot();
        let marker = snap.marker.unwrap();
        assert_eq!(marker.color, [1.0, 0.0, 0.0, 1.0]);
        assert!(marker.double_sided);
        assert_eq!(snap.eye, Vec3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn snapshot_follows_configured_sidedness() {
        let config = SceneConfig {
            marker_double_sided: false,
            ..SceneConfig::default()
        };
        let mut handle = SceneHandle::new(config);
        let state = handle.build(Viewport::new(800, 600)).unwrap();
        state.spawn_marker(1, Vec3::new(0.0, 0.0, 10.5));
        assert!(!state.active_marker().unwrap().double_sided);
        assert!(!state.render_snapshot().marker.unwrap().double_sided);
    }
}

//! Damped orbit controls.
//!
//! Input handlers queue rotation and dolly requests; [`OrbitControls::update`]
//! applies them to the camera once per frame. With damping on, each update
//! applies `damping_factor` of the queued rotation and keeps the remainder,
//! so the camera eases to rest after the pointer stops.

use crate::config::SceneConfig;
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Keeps the polar angle away from the poles so `look_at` never degenerates.
const POLAR_MARGIN: f32 = 1e-4;
const MOVE_EPSILON: f32 = 1e-6;
const ZOOM_BASE: f32 = 0.95;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    /// Orbit focus; the camera always looks here after `update`.
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_scale: f32,
}

impl OrbitControls {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: config.damping_factor,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Snap the orbit focus. No easing is applied.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Queue a drag of `dx`, `dy` pixels. A drag across the full viewport
    /// height turns the camera by one revolution.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_azimuth -= TAU * dx / h * self.rotate_speed;
        self.pending_polar -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a dolly step. Negative deltas (wheel up) move closer.
    pub fn zoom(&mut self, delta: f32) {
        let step = ZOOM_BASE.powf(self.zoom_speed);
        if delta < 0.0 {
            self.pending_scale *= step;
        } else if delta > 0.0 {
            self.pending_scale /= step;
        }
    }

    /// True while queued rotation is still being eased out.
    pub fn is_settling(&self) -> bool {
        self.pending_azimuth.abs() > MOVE_EPSILON || self.pending_polar.abs() > MOVE_EPSILON
    }

    /// Apply queued input to `camera` and aim it at `target`.
    /// Returns whether the camera moved or re-aimed.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        let (mut azimuth, mut polar) = if radius > MOVE_EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI * 0.5)
        };

        let factor = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        azimuth += self.pending_azimuth * factor;
        polar = (polar + self.pending_polar * factor).clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
        radius = (radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let new_offset = Vec3::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.cos(),
        );
        let new_eye = self.target + new_offset;

        if self.enable_damping {
            self.pending_azimuth *= 1.0 - self.damping_factor;
            self.pending_polar *= 1.0 - self.damping_factor;
            if !self.is_settling() {
                self.pending_azimuth = 0.0;
                self.pending_polar = 0.0;
            }
        } else {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }
        self.pending_scale = 1.0;

        let moved = new_eye.distance_squared(camera.eye) > MOVE_EPSILON
            || camera.target.distance_squared(self.target) > MOVE_EPSILON;
        camera.eye = new_eye;
        camera.look_at(self.target);
        moved
    }
}

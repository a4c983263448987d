//! Transient ripple markers and their growth animation.

use crate::config::SceneConfig;
use crate::constants::{MARKER_SCALE_END, MARKER_SCALE_START, MARKER_SCALE_STEP};
use crate::ticker::TickStatus;
use glam::{Mat4, Quat, Vec3};

/// Linear per-frame growth from `start` until the scale reaches `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGrowth {
    pub start: f32,
    pub step: f32,
    pub end: f32,
}

impl Default for MarkerGrowth {
    fn default() -> Self {
        Self {
            start: MARKER_SCALE_START,
            step: MARKER_SCALE_STEP,
            end: MARKER_SCALE_END,
        }
    }
}

impl MarkerGrowth {
    /// Frames needed for the scale to reach `end`: the first `n >= 1` with
    /// `start + step * n >= end`. Degenerate settings (no span, non-positive
    /// step) finish after one frame.
    pub fn total_steps(&self) -> u32 {
        let span = self.end - self.start;
        if self.step.is_nan() || self.step <= 0.0 || span.is_nan() || span <= 0.0 {
            return 1;
        }
        let estimate = span / self.step;
        if !estimate.is_finite() || estimate >= u32::MAX as f32 {
            return u32::MAX;
        }
        // relative slack for f32 rounding, e.g. 0.1 + 0.05 * 38 lands a hair off 2.0
        let threshold = self.end - self.end.abs() * 4.0 * f32::EPSILON;
        let reached = |n: u32| self.start + self.step * n as f32 >= threshold;
        let mut n = (estimate as u32).max(1);
        while n > 1 && reached(n - 1) {
            n -= 1;
        }
        while !reached(n) {
            n += 1;
        }
        n
    }

    /// Scale after `steps` frames. Computed from the step count rather than
    /// accumulated so it does not drift.
    pub fn scale_at(&self, steps: u32) -> f32 {
        if steps >= self.total_steps() {
            return self.end.max(self.start);
        }
        self.start + self.step * steps as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPhase {
    Growing,
    Removed,
}

/// A flat disc placed on the marker shell, facing the body centre.
///
/// The position is fixed in world space when the marker is spawned; the
/// marker does not follow any body transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    id: u64,
    position: Vec3,
    orientation: Quat,
    scale: f32,
    steps_taken: u32,
    growth: MarkerGrowth,
    phase: MarkerPhase,
    pub color: [f32; 4],
    pub radius: f32,
    pub segments: u32,
    pub double_sided: bool,
}

impl Marker {
    pub fn new(id: u64, position: Vec3, config: &SceneConfig) -> Self {
        Self {
            id,
            position,
            orientation: facing_origin(position),
            scale: config.growth.start,
            steps_taken: 0,
            growth: config.growth,
            phase: MarkerPhase::Growing,
            color: config.marker_color,
            radius: config.marker_radius,
            segments: config.marker_segments,
            double_sided: config.marker_double_sided,
        }
    }

    /// Advance the growth animation by one frame. The step that brings the
    /// scale to the end value also removes the marker.
    pub fn grow(&mut self) -> TickStatus {
        if self.phase == MarkerPhase::Removed {
            return TickStatus::Done;
        }
        self.steps_taken += 1;
        self.scale = self.scale.max(self.growth.scale_at(self.steps_taken));
        if self.steps_taken >= self.growth.total_steps() {
            self.phase = MarkerPhase::Removed;
            TickStatus::Done
        } else {
            TickStatus::Continue
        }
    }

    /// End the animation early, e.g. when a newer selection replaces this marker.
    pub fn force_remove(&mut self) {
        self.phase = MarkerPhase::Removed;
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn phase(&self) -> MarkerPhase {
        self.phase
    }

    pub fn is_growing(&self) -> bool {
        self.phase == MarkerPhase::Growing
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Unit-disc model transform: scale, face the origin, move to `position`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale * self.radius),
            self.orientation,
            self.position,
        )
    }

    /// Direction the disc's front face points in (towards the body centre).
    pub fn facing(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }
}

// Discs are built in the XY plane facing +Z; rotate +Z onto the direction of the origin.
fn facing_origin(position: Vec3) -> Quat {
    let to_origin = -position;
    if to_origin.length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::Z, to_origin.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_growth_takes_38_steps() {
        assert_eq!(MarkerGrowth::default().total_steps(), 38);
    }

    #[test]
    fn degenerate_growth_finishes_immediately() {
        let g = MarkerGrowth {
            start: 2.0,
            step: 0.05,
            end: 2.0,
        };
        assert_eq!(g.total_steps(), 1);
        let g = MarkerGrowth {
            start: 0.1,
            step: 0.0,
            end: 2.0,
        };
        assert_eq!(g.total_steps(), 1);
    }

    #[test]
    fn exact_multiple_is_not_overcounted() {
        let g = MarkerGrowth {
            start: 0.0,
            step: 0.25,
            end: 1.0,
        };
        assert_eq!(g.total_steps(), 4);
        assert_eq!(g.scale_at(2), 0.5);
        assert_eq!(g.scale_at(4), 1.0);
    }

    #[test]
    fn end_just_past_a_step_needs_one_more_frame() {
        let g = MarkerGrowth {
            start: 0.0,
            step: 1.0,
            end: 3.0005,
        };
        assert_eq!(g.total_steps(), 4);
        assert_eq!(g.scale_at(3), 3.0);
        assert_eq!(g.scale_at(4), 3.0005);
    }

    #[test]
    fn unreachable_end_never_finishes() {
        let g = MarkerGrowth {
            start: 0.0,
            step: 1.0,
            end: f32::INFINITY,
        };
        assert_eq!(g.total_steps(), u32::MAX);
    }

    #[test]
    fn faces_body_centre() {
        let config = SceneConfig::default();
        for p in [
            Vec3::new(0.0, 0.0, 10.5),
            Vec3::new(0.0, 0.0, -10.5),
            Vec3::new(3.0, -7.0, 2.0),
            Vec3::new(0.0, 10.5, 0.0),
        ] {
            let m = Marker::new(1, p, &config);
            let expected = (-p).normalize();
            assert!(m.facing().distance(expected) < 1e-4, "{p:?}");
        }
    }

    #[test]
    fn model_matrix_places_disc_rim() {
        let config = SceneConfig::default();
        let p = Vec3::new(0.0, 10.5, 0.0);
        let m = Marker::new(1, p, &config);
        let centre = m.model_matrix().transform_point3(Vec3::ZERO);
        assert!(centre.distance(p) < 1e-5);
        let rim = m.model_matrix().transform_point3(Vec3::X);
        assert!((rim.distance(p) - m.scale()).abs() < 1e-5);
        // the rim stays in the tangent plane
        assert!((rim.y - 10.5).abs() < 1e-5);
    }

    #[test]
    fn grows_then_removes() {
        let config = SceneConfig::default();
        let mut m = Marker::new(7, Vec3::new(0.0, 0.0, 10.5), &config);
        assert_eq!(m.scale(), 0.1);
        let mut prev = m.scale();
        let mut steps = 0;
        while m.grow() == TickStatus::Continue {
            steps += 1;
            assert!(m.scale() > prev);
            assert!(m.scale() < 2.0);
            prev = m.scale();
        }
        steps += 1;
        assert_eq!(steps, 38);
        assert!(m.scale() >= 2.0);
        assert_eq!(m.phase(), MarkerPhase::Removed);
        assert_eq!(m.grow(), TickStatus::Done);
        assert_eq!(m.steps_taken(), 38);
    }

    #[test]
    fn force_remove_stops_growth() {
        let config = SceneConfig::default();
        let mut m = Marker::new(1, Vec3::X * 10.5, &config);
        m.grow();
        let scale = m.scale();
        m.force_remove();
        assert!(!m.is_growing());
        assert_eq!(m.grow(), TickStatus::Done);
        assert_eq!(m.scale(), scale);
    }
}

use crate::catalog::SeismicEvent;
use crate::error::SceneError;
use crate::projection::{project_checked, vec3_to_lat_lon};
use crate::scene::{SceneHandle, SceneState};
use crate::ticker::{TaskId, Ticker};
use glam::Vec3;

/// Turns an event selection into camera focus plus a growing marker.
///
/// Holds the growth task of the marker it spawned last so a new selection can
/// cancel it: at most one marker and one growth animation exist at a time.
#[derive(Debug, Default)]
pub struct EventVisualizer {
    next_marker_id: u64,
    growth_task: Option<TaskId>,
}

impl EventVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the scene on `event` and start its marker animation.
    /// Returns the marker position (on the shell just above the surface).
    ///
    /// Fails without touching the scene if it is not built yet or the event's
    /// coordinate is out of range.
    pub fn visualize(
        &mut self,
        scene: &mut SceneHandle,
        ticker: &mut Ticker<SceneState>,
        event: &SeismicEvent,
    ) -> Result<Vec3, SceneError> {
        let state = scene.state_mut()?;
        let target = project_checked(
            event.latitude,
            event.longitude,
            state.config().marker_shell_radius(),
        )?;

        state.focus(target);

        if let Some(task) = self.growth_task.take() {
            if ticker.cancel(task) {
                log::debug!("cancelled unfinished marker growth");
            }
        }
        self.next_marker_id += 1;
        let id = self.next_marker_id;
        state.spawn_marker(id, target);
        self.growth_task = Some(ticker.register(move |scene: &mut SceneState| scene.grow_marker(id)));

        let (lat, lon) = vec3_to_lat_lon(target);
        log::info!(
            "visualizing {} (M{:.1}) at lat {:.1} lon {:.1}",
            event.timestamp,
            event.magnitude,
            lat,
            lon
        );
        Ok(target)
    }

    /// Growth task of the current marker, if it is still registered.
    pub fn growth_task(&self) -> Option<TaskId> {
        self.growth_task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::projection::lat_lon_to_vec3;
    use crate::state::Viewport;

    fn built() -> (SceneHandle, Ticker<SceneState>) {
        let mut scene = SceneHandle::new(SceneConfig::default());
        scene.build(Viewport::new(800, 600)).unwrap();
        (scene, Ticker::new())
    }

    #[test]
    fn requires_built_scene() {
        let mut scene = SceneHandle::new(SceneConfig::default());
        let mut ticker = Ticker::new();
        let event = SeismicEvent::new("t", 0.0, 0.0, 1.0);
        assert_eq!(
            EventVisualizer::new().visualize(&mut scene, &mut ticker, &event),
            Err(SceneError::SceneNotInitialized)
        );
        assert!(ticker.is_empty());
    }

    #[test]
    fn rejects_bad_coordinate_without_side_effects() {
        let (mut scene, mut ticker) = built();
        let event = SeismicEvent::new("t", -95.0, 0.0, 1.0);
        let err = EventVisualizer::new()
            .visualize(&mut scene, &mut ticker, &event)
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidCoordinate { .. }));
        let state = scene.state().unwrap();
        assert_eq!(state.controls.target, Vec3::ZERO);
        assert!(state.active_marker().is_none());
        assert!(ticker.is_empty());
    }

    #[test]
    fn focuses_and_spawns_marker() {
        let (mut scene, mut ticker) = built();
        let event = SeismicEvent::new("t", 21.0, 88.0, 2.7);
        let mut vis = EventVisualizer::new();
        let target = vis.visualize(&mut scene, &mut ticker, &event).unwrap();
        assert_eq!(target, lat_lon_to_vec3(21.0, 88.0, 10.5));
        let state = scene.state().unwrap();
        assert_eq!(state.camera.target, target);
        assert_eq!(state.controls.target, target);
        let marker = state.active_marker().unwrap();
        assert_eq!(marker.position(), target);
        assert_eq!(marker.scale(), 0.1);
        assert!(ticker.contains(vis.growth_task().unwrap()));
    }

    #[test]
    fn reselecting_cancels_previous_growth() {
        let (mut scene, mut ticker) = built();
        let mut vis = EventVisualizer::new();
        vis.visualize(&mut scene, &mut ticker, &SeismicEvent::new("a", 10.0, 10.0, 1.0))
            .unwrap();
        let first = vis.growth_task().unwrap();
        for _ in 0..5 {
            ticker.tick(scene.state_mut().unwrap());
        }
        vis.visualize(&mut scene, &mut ticker, &SeismicEvent::new("b", -10.0, -10.0, 1.0))
            .unwrap();
        assert!(!ticker.contains(first));
        assert_eq!(ticker.len(), 1);
        let marker = scene.state().unwrap().active_marker().unwrap();
        assert_eq!(marker.steps_taken(), 0);
        assert_eq!(marker.position(), lat_lon_to_vec3(-10.0, -10.0, 10.5));
    }
}

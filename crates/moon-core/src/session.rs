use crate::catalog::Catalog;
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::scene::{FrameSnapshot, SceneHandle, SceneState};
use crate::state::Viewport;
use crate::ticker::{TaskId, Ticker};
use crate::visualizer::EventVisualizer;
use glam::Vec3;

/// One viewing session: catalog, scene, frame scheduler and visualizer.
///
/// Front-ends create one per page/window, call [`Session::mount`] once a
/// drawable size is known, forward input, and call [`Session::frame`] from
/// their frame callback. Dropping the session releases everything.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    scene: SceneHandle,
    ticker: Ticker<SceneState>,
    visualizer: EventVisualizer,
    render_task: Option<TaskId>,
    selected: Option<usize>,
}

impl Session {
    pub fn new(catalog: Catalog, config: SceneConfig) -> Self {
        Self {
            catalog,
            scene: SceneHandle::new(config),
            ticker: Ticker::new(),
            visualizer: EventVisualizer::new(),
            render_task: None,
            selected: None,
        }
    }

    /// Build the scene and start the render-loop task. Safe to call again;
    /// repeated calls change nothing.
    pub fn mount(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.scene.build(viewport)?;
        if self.render_task.is_none() {
            self.render_task = Some(self.ticker.register(SceneState::advance_frame));
        }
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.is_built()
    }

    /// Visualize the event at `index` in the catalog.
    pub fn select(&mut self, index: usize) -> Result<Vec3, SceneError> {
        let event = self.catalog.get(index)?;
        let target = self
            .visualizer
            .visualize(&mut self.scene, &mut self.ticker, event)?;
        self.selected = Some(index);
        Ok(target)
    }

    pub fn select_next(&mut self) -> Result<Vec3, SceneError> {
        let index = self.catalog.next_index(self.selected).ok_or(
            SceneError::EventIndexOutOfRange {
                index: 0,
                len: 0,
            },
        )?;
        self.select(index)
    }

    pub fn select_prev(&mut self) -> Result<Vec3, SceneError> {
        let index = self.catalog.prev_index(self.selected).ok_or(
            SceneError::EventIndexOutOfRange {
                index: 0,
                len: 0,
            },
        )?;
        self.select(index)
    }

    /// Run one frame of every scheduled task and return what to draw.
    pub fn frame(&mut self) -> Result<FrameSnapshot, SceneError> {
        let state = self.scene.state_mut()?;
        self.ticker.tick(state);
        Ok(state.render_snapshot())
    }

    /// Forward a pointer drag in pixels to the orbit controls.
    pub fn orbit(&mut self, dx: f32, dy: f32) -> Result<(), SceneError> {
        let state = self.scene.state_mut()?;
        let height = state.viewport().height as f32;
        state.controls.rotate(dx, dy, height);
        Ok(())
    }

    pub fn zoom(&mut self, delta: f32) -> Result<(), SceneError> {
        self.scene.state_mut()?.controls.zoom(delta);
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.scene.state_mut()?.resize(viewport);
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Number of tasks on the frame scheduler (render loop plus any growth animation).
    pub fn active_tasks(&self) -> usize {
        self.ticker.len()
    }
}

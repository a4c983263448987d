//! Per-frame task scheduling.
//!
//! The front-ends own the real frame callback (`requestAnimationFrame` on the
//! web, the winit event loop natively) and call [`Ticker::tick`] once per
//! frame. Tasks run to completion in registration order and report whether
//! they want to run again, so nothing reschedules itself and tests can drive
//! any number of frames deterministically.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

pub type FrameTask<C> = Box<dyn FnMut(&mut C) -> TickStatus>;

pub struct Ticker<C> {
    tasks: Vec<(TaskId, FrameTask<C>)>,
    next_id: u64,
    frame: u64,
}

impl<C> Default for Ticker<C> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
            frame: 0,
        }
    }
}

impl<C> fmt::Debug for Ticker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("tasks", &self.tasks.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("frame", &self.frame)
            .finish()
    }
}

impl<C> Ticker<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task that runs on every subsequent tick until it returns
    /// [`TickStatus::Done`] or is cancelled.
    pub fn register<F>(&mut self, task: F) -> TaskId
    where
        F: FnMut(&mut C) -> TickStatus + 'static,
    {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push((id, Box::new(task)));
        id
    }

    /// Drop a task before it finishes. Returns false if it already finished or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(task_id, _)| *task_id != id);
        self.tasks.len() != before
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(task_id, _)| *task_id == id)
    }

    /// Run every live task once, in registration order. Returns the number of
    /// tasks still registered afterwards.
    pub fn tick(&mut self, ctx: &mut C) -> usize {
        self.frame += 1;
        self.tasks
            .retain_mut(|(_, task)| task(ctx) == TickStatus::Continue);
        self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

use std::sync::Arc;

use log::debug;
use sprig_ids::TaskID;

use crate::Interval;

pub type Action<C> = Box<dyn FnOnce(&mut C)>;

struct DelayedTask<C> {
    id: TaskID,
    interval: Arc<Interval>,
    elapsed: f32,
    action: Action<C>,
}

/// Frame-driven queue of delayed actions. Nothing runs until [`Scheduler::tick`]
/// (or [`Scheduler::drain_due`]) is called by the owner's update loop.
pub struct Scheduler<C> {
    tasks: Vec<DelayedTask<C>>,
    next_index: u32,
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_index: 1,
        }
    }

    /// Run `action` once, on the first tick where at least `interval` seconds
    /// have passed. A zero interval fires on the next tick, never immediately.
    pub fn wait_and_execute<F>(&mut self, interval: Arc<Interval>, action: F) -> TaskID
    where
        F: FnOnce(&mut C) + 'static,
    {
        let id = TaskID::from_parts(self.next_index, 0);
        self.next_index = self.next_index.wrapping_add(1).max(1);
        self.tasks.push(DelayedTask {
            id,
            interval,
            elapsed: 0.0,
            action: Box::new(action),
        });
        id
    }

    pub fn cancel(&mut self, id: TaskID) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            debug!("cancelled task {id}");
        }
        cancelled
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, id: TaskID) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Advance every task by `delta` and hand back the ones that came due, in the
    /// order they were scheduled. The caller runs them.
    pub fn drain_due(&mut self, delta: f32) -> Vec<(TaskID, Action<C>)> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.tasks.len());

        for mut task in self.tasks.drain(..) {
            task.elapsed += delta;
            if task.elapsed >= task.interval.seconds {
                due.push((task.id, task.action));
            } else {
                kept.push(task);
            }
        }

        self.tasks = kept;
        due
    }

    /// Run actions returned by [`Scheduler::drain_due`] against `ctx`, in order.
    /// Owners that hold the scheduler inside `ctx` drain first, then call this.
    pub fn run_due(due: Vec<(TaskID, Action<C>)>, ctx: &mut C) -> usize {
        let fired = due.len();
        for (id, action) in due {
            debug!("running task {id}");
            action(ctx);
        }
        fired
    }

    /// Advance by `delta` and run every due action against `ctx`.
    pub fn tick(&mut self, delta: f32, ctx: &mut C) -> usize {
        let due = self.drain_due(delta);
        Self::run_due(due, ctx)
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use log::debug;
use sprig_ids::{NodeID, TaskID};
use sprig_time::{Fade, Interval};

use super::TimeAPI;
use crate::{Runtime, RuntimeError};

impl TimeAPI for Runtime {
    fn get_delta(&self) -> f32 {
        self.time.delta
    }

    fn get_elapsed(&self) -> f32 {
        self.time.elapsed
    }

    fn get_interval(&mut self, seconds: f32) -> Arc<Interval> {
        self.intervals.get_interval(seconds)
    }

    fn wait_and_execute<F>(&mut self, seconds: f32, action: F) -> TaskID
    where
        Self: Sized,
        F: FnOnce(&mut Self) + 'static,
    {
        let interval = self.intervals.get_interval(seconds);
        let id = self.scheduler.wait_and_execute(interval, action);
        debug!("scheduled task {id} in {seconds}s");
        id
    }

    fn cancel_task(&mut self, id: TaskID) -> bool {
        self.scheduler.cancel(id)
    }

    fn fade_canvas_group(
        &mut self,
        node: NodeID,
        target: f32,
        duration: f32,
    ) -> Result<(), RuntimeError> {
        let scene_node = self
            .nodes
            .get_mut(node)
            .ok_or(RuntimeError::NodeNotFound(node))?;
        let group = scene_node
            .canvas_group_mut()
            .ok_or(RuntimeError::NotCanvasGroup(node))?;

        if duration <= 0.0 {
            group.alpha = target;
            self.fades.remove(&node);
            return Ok(());
        }

        let start = group.alpha;
        self.fades.insert(node, Fade::new(start, target, duration));
        Ok(())
    }
}

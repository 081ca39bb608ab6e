mod nodes;
mod time;

use std::sync::Arc;

use sprig_ids::{NodeID, TaskID};
use sprig_nodes::FindError;
use sprig_structs::Vector2;
use sprig_time::Interval;

use crate::RuntimeError;

pub trait TimeAPI {
    fn get_delta(&self) -> f32;

    fn get_elapsed(&self) -> f32;

    /// Shared descriptor for `seconds` from the runtime's interval cache.
    fn get_interval(&mut self, seconds: f32) -> Arc<Interval>;

    /// Run `action` once after `seconds` of frame time.
    fn wait_and_execute<F>(&mut self, seconds: f32, action: F) -> TaskID
    where
        Self: Sized,
        F: FnOnce(&mut Self) + 'static;

    fn cancel_task(&mut self, id: TaskID) -> bool;

    /// Fade a canvas group's alpha from its current value to `target` over `duration` seconds.
    fn fade_canvas_group(
        &mut self,
        node: NodeID,
        target: f32,
        duration: f32,
    ) -> Result<(), RuntimeError>;
}

pub trait NodeAPI {
    fn find_deep_child(&self, root: NodeID, name: &str) -> Result<Option<NodeID>, FindError>;

    /// Queue every direct child of `parent` for destruction at the end of the frame.
    fn delete_children(&mut self, parent: NodeID) -> Result<usize, RuntimeError>;

    /// Local-space point for a UI rect node, using its own world position as the screen point.
    fn canvas_element_local_position(&self, node: NodeID) -> Result<Vector2, RuntimeError>;
}

use sprig_ids::NodeID;
use sprig_nodes::FindError;
use sprig_structs::{Vector2, canvas_element_local_position};

use super::NodeAPI;
use crate::{Runtime, RuntimeError};

impl NodeAPI for Runtime {
    fn find_deep_child(&self, root: NodeID, name: &str) -> Result<Option<NodeID>, FindError> {
        self.nodes.find_deep_child(root, name)
    }

    fn delete_children(&mut self, parent: NodeID) -> Result<usize, RuntimeError> {
        if !self.nodes.contains(parent) {
            return Err(RuntimeError::NodeNotFound(parent));
        }
        Ok(self.nodes.queue_free_children(parent))
    }

    fn canvas_element_local_position(&self, node: NodeID) -> Result<Vector2, RuntimeError> {
        let rect = self
            .nodes
            .get(node)
            .ok_or(RuntimeError::NodeNotFound(node))?
            .ui_rect()
            .ok_or(RuntimeError::NotUiRect(node))?;

        canvas_element_local_position(rect, &self.camera, &self.viewport)
            .ok_or(RuntimeError::Unprojectable(node))
    }
}

use log::debug;
use sprig_ids::NodeID;

use crate::{FindError, NodeError, SceneGraph, SceneNode, find_deep_child};

pub struct NodeArena {
    nodes: Vec<Option<SceneNode>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
    /// Nodes scheduled for destruction at the end of the frame.
    pending_free: Vec<NodeID>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // Reserve index 0 as invalid/nil sentinel so first real node ID is 1.
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        let mut generations = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(None);
        generations.push(0);
        Self {
            nodes,
            generations,
            free_indices: Vec::new(),
            pending_free: Vec::new(),
        }
    }

    /// Insert a detached node, returns NodeID with index and generation
    pub fn insert(&mut self, mut node: SceneNode) -> NodeID {
        node.parent = NodeID::nil();
        node.children.clear();

        if let Some(index) = self.free_indices.pop() {
            self.nodes[index] = Some(node);
            let generation = self.generations[index];
            return NodeID::from_parts(index as u32, generation);
        }

        let index = self.nodes.len();
        self.nodes.push(Some(node));
        self.generations.push(0);
        NodeID::from_parts(index as u32, 0)
    }

    /// Insert `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeID, node: SceneNode) -> Result<NodeID, NodeError> {
        if !self.contains(parent) {
            return Err(NodeError::ParentNotFound(parent));
        }
        let id = self.insert(node);
        if let Some(child) = self.get_mut(id) {
            child.parent = parent;
        }
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        Ok(id)
    }

    fn slot(&self, id: NodeID) -> Option<usize> {
        if id.is_nil()
            || id.index() == 0
            || id.index() >= self.nodes.len() as u32
            || self.generations[id.index() as usize] != id.generation()
        {
            return None;
        }
        Some(id.index() as usize)
    }

    /// Get a node by ID, returns None if generation doesn't match
    pub fn get(&self, id: NodeID) -> Option<&SceneNode> {
        self.nodes[self.slot(id)?].as_ref()
    }

    pub fn get_mut(&mut self, id: NodeID) -> Option<&mut SceneNode> {
        let index = self.slot(id)?;
        self.nodes[index].as_mut()
    }

    /// Remove a single node, bumping the generation counter.
    /// Its children are left in place with a dangling parent; use
    /// [`NodeArena::queue_free`] to drop a whole subtree.
    pub fn remove(&mut self, id: NodeID) -> Option<SceneNode> {
        let index = self.slot(id)?;
        self.generations[index] = self.generations[index].wrapping_add(1);
        let removed = self.nodes[index].take();
        if removed.is_some() {
            self.free_indices.push(index);
        }
        removed
    }

    pub fn contains(&self, id: NodeID) -> bool {
        self.slot(id)
            .is_some_and(|index| self.nodes[index].is_some())
    }

    /// Number of active nodes
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.is_none())
    }

    pub fn find_deep_child(&self, root: NodeID, name: &str) -> Result<Option<NodeID>, FindError> {
        find_deep_child(self, root, name)
    }

    /// Schedule `id` and its subtree for destruction on the next [`NodeArena::flush_freed`].
    pub fn queue_free(&mut self, id: NodeID) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.pending_free.push(id);
        true
    }

    /// Schedule every direct child of `parent` for destruction. Returns how many were queued.
    pub fn queue_free_children(&mut self, parent: NodeID) -> usize {
        let Some(node) = self.get(parent) else {
            return 0;
        };
        let children = node.children.clone();
        self.pending_free.extend_from_slice(&children);
        children.len()
    }

    pub fn pending_free(&self) -> usize {
        self.pending_free.len()
    }

    /// Destroy everything queued so far. Each queued node is detached from its parent
    /// and removed along with all of its descendants. Returns the number of nodes removed.
    pub fn flush_freed(&mut self) -> usize {
        let queued = std::mem::take(&mut self.pending_free);
        let mut removed = 0;

        for id in queued {
            let Some(parent) = self.get(id).map(|node| node.parent) else {
                continue;
            };
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children.retain(|child| *child != id);
            }

            let mut stack = vec![id];
            while let Some(next) = stack.pop() {
                if let Some(node) = self.remove(next) {
                    stack.extend(node.children);
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            debug!("flushed {removed} freed node(s)");
        }
        removed
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for NodeArena {
    fn node_name(&self, id: NodeID) -> Option<&str> {
        self.get(id).map(|node| node.name.as_ref())
    }

    fn node_children(&self, id: NodeID) -> &[NodeID] {
        self.get(id)
            .map_or(&[][..], |node| node.children.as_slice())
    }
}

mod errors;
mod node_arena;
mod scene_graph;
mod scene_node;

pub use errors::{FindError, NodeError};
pub use node_arena::NodeArena;
pub use scene_graph::{SceneGraph, find_deep_child};
pub use scene_node::{CanvasGroup, SceneNode, SceneNodeData};

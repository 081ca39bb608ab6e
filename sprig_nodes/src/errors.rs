use sprig_ids::NodeID;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FindError {
    #[error("search root {0} is nil or no longer in the scene")]
    InvalidRoot(NodeID),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("parent node {0} does not exist")]
    ParentNotFound(NodeID),
}

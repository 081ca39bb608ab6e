use sprig_ids::NodeID;
use sprig_nodes::FindError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeID),
    #[error("node {0} is not a canvas group")]
    NotCanvasGroup(NodeID),
    #[error("node {0} is not a UI rect")]
    NotUiRect(NodeID),
    #[error("node {0} cannot be projected with the current camera and viewport")]
    Unprojectable(NodeID),
    #[error(transparent)]
    Find(#[from] FindError),
}

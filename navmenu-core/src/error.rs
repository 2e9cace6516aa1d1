use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised while building a menu tree or loading configuration.
///
/// Event handling never produces these; interaction failures degrade to no-ops.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu node {0} registered twice")]
    DuplicateNode(NodeId),
    #[error("menu name `{0}` used twice")]
    DuplicateName(String),
    #[error("menu node {node} refers to unknown parent {parent}")]
    UnknownParent { node: NodeId, parent: NodeId },
    #[error("invalid menu config: {0}")]
    InvalidConfig(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

use crate::node::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unexpected closing tag </{tag}> at byte {offset}")]
    UnexpectedClose { tag: String, offset: usize },

    #[error("element <{tag}> was never closed")]
    Unclosed { tag: String },

    #[error("malformed tag at byte {offset}")]
    MalformedTag { offset: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("node {0:?} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {0:?} cannot hold children")]
    NotAContainer(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("no mount point with class `{0}`")]
    MountPointNotFound(String),

    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),
}

pub type Result<T> = std::result::Result<T, DomError>;

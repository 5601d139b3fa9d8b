mod arena;
mod commands;
pub mod markup;
pub mod query;
pub mod serialize;
mod types;

pub use arena::NodeArena;
pub use commands::DomMutation;
pub use markup::parse_fragment;
pub use serialize::{escape, inner_html, outer_html};
pub use types::{Attribute, Attributes, ContainerNode, ElementNode, Name, Node, NodeId};

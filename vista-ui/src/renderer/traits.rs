use crate::error::Result;
use crate::node::NodeId;

/// Display tree backend
///
/// The operations the view engine needs from a live tree. Implementations
/// map [`NodeId`]s onto their own nodes (an arena in memory, DOM elements in
/// a browser). Fragments produced by [`DisplayTree::parse_fragment`] are
/// detached: they live in the same id space but are never visible.
pub trait DisplayTree {
    /// Remove every child of `node`.
    fn clear(&mut self, node: NodeId) -> Result<()>;

    /// Parse `markup` and insert it before the first child of `node`
    /// (`insertAdjacentHTML("afterbegin", ..)`).
    fn insert_markup(&mut self, node: NodeId, markup: &str) -> Result<()>;

    /// Parse `markup` into a detached fragment.
    fn parse_fragment(&mut self, markup: &str) -> Result<NodeId>;

    /// Drop a fragment returned by [`DisplayTree::parse_fragment`].
    fn release(&mut self, fragment: NodeId);

    fn contains(&self, node: NodeId) -> bool;

    /// Element descendants of `root` in document order.
    fn descendant_elements(&self, root: NodeId) -> Result<Vec<NodeId>>;

    fn is_equal_node(&self, a: NodeId, b: NodeId) -> bool;

    /// `nodeValue` of the first child: text for a text node, `None` when
    /// there is no first child or it is an element.
    fn first_child_value(&self, node: NodeId) -> Option<&str>;

    fn text_content(&self, node: NodeId) -> Result<String>;

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn attributes(&self, node: NodeId) -> Result<Vec<(String, String)>>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    fn inner_html(&self, node: NodeId) -> Result<String>;
}

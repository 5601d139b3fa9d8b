use super::traits::DisplayTree;
use crate::error::{DomError, Result};
use crate::events::{DomEvent, EventKind, Listener, ListenerFn};
use crate::node::{query, serialize, DomMutation, Node, NodeArena, NodeId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Shared handle to one document. Every view mounted in the document holds a clone.
pub type SharedDocument = Rc<RefCell<MemoryDocument>>;

/// In-memory display tree
///
/// A `body` element over a [`NodeArena`] and the click listeners registered
/// on its nodes. With [`MemoryDocument::with_recording`] it also logs every
/// mutation applied through [`DisplayTree`]; by default nothing is kept.
pub struct MemoryDocument {
    arena: NodeArena,
    body: NodeId,
    record: bool,
    mutations: Vec<DomMutation>,
    listeners: Vec<Listener>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let body = arena.create(Node::element("body"));
        Self {
            arena,
            body,
            record: false,
            mutations: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// A document whose body starts out with `markup`. Not recorded as a mutation.
    pub fn from_markup(markup: &str) -> Result<Self> {
        let mut doc = Self::new();
        let fragment = crate::node::parse_fragment(&mut doc.arena, markup)?;
        doc.arena.prepend_children_of(doc.body, fragment)?;
        doc.arena.dispose(fragment);
        Ok(doc)
    }

    /// Keep a log of applied mutations, readable with [`MemoryDocument::mutations`].
    pub fn with_recording(mut self) -> Self {
        self.record = true;
        self
    }

    pub fn is_recording(&self) -> bool {
        self.record
    }

    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// First element under `body` carrying `class`.
    pub fn query_selector_class(&self, class: &str) -> Option<NodeId> {
        query::query_selector_class(&self.arena, self.body, class)
    }

    /// Like [`MemoryDocument::query_selector_class`], for binding a view's mount point.
    pub fn mount_point(&self, class: &str) -> Result<NodeId> {
        self.query_selector_class(class)
            .ok_or_else(|| DomError::MountPointNotFound(class.to_string()))
    }

    pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        query::closest_with_class(&self.arena, node, class)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.arena.get(node)?.as_element()?.attribute(name)
    }

    pub fn inner_html_of(&self, node: NodeId) -> String {
        serialize::inner_html(&self.arena, node)
    }

    /// Serialized body content.
    pub fn html(&self) -> String {
        self.inner_html_of(self.body)
    }

    /// Clear `node`, then insert `markup` as its only content.
    pub fn replace_children(&mut self, node: NodeId, markup: &str) -> Result<()> {
        self.clear(node)?;
        self.insert_markup(node, markup)
    }

    pub fn mutations(&self) -> &[DomMutation] {
        &self.mutations
    }

    pub fn take_mutations(&mut self) -> Vec<DomMutation> {
        std::mem::take(&mut self.mutations)
    }

    pub fn add_event_listener<F>(&mut self, node: NodeId, kind: EventKind, callback: F)
    where
        F: FnMut(&DomEvent, &SharedDocument) + 'static,
    {
        let callback: ListenerFn = Rc::new(RefCell::new(callback));
        self.listeners.push(Listener {
            node,
            kind,
            callback,
        });
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.iter().filter(|l| l.node == node).count()
    }

    /// Listeners for `kind` on `target` and its ancestors, innermost first.
    pub(crate) fn listeners_on_path(
        &self,
        target: NodeId,
        kind: EventKind,
    ) -> Vec<(NodeId, ListenerFn)> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(node) = current {
            for listener in &self.listeners {
                if listener.node == node && listener.kind == kind {
                    path.push((node, listener.callback.clone()));
                }
            }
            current = self.arena.parent(node);
        }
        path
    }

    fn log(&mut self, mutation: DomMutation) {
        if self.record {
            self.mutations.push(mutation);
        }
    }

    /// Drop listeners whose node has been disposed, so reused ids start clean.
    fn prune_listeners(&mut self) {
        let arena = &self.arena;
        self.listeners.retain(|l| arena.contains(l.node));
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayTree for MemoryDocument {
    fn clear(&mut self, node: NodeId) -> Result<()> {
        self.arena.clear_children(node)?;
        self.prune_listeners();
        self.log(DomMutation::Clear { node });
        Ok(())
    }

    fn insert_markup(&mut self, node: NodeId, markup: &str) -> Result<()> {
        self.arena.node(node)?;
        let fragment = crate::node::parse_fragment(&mut self.arena, markup)?;
        let moved = self.arena.prepend_children_of(node, fragment);
        self.arena.dispose(fragment);
        moved?;
        self.log(DomMutation::InsertMarkup {
            node,
            markup: markup.to_string(),
        });
        Ok(())
    }

    fn parse_fragment(&mut self, markup: &str) -> Result<NodeId> {
        crate::node::parse_fragment(&mut self.arena, markup)
    }

    fn release(&mut self, fragment: NodeId) {
        self.arena.dispose(fragment);
    }

    fn contains(&self, node: NodeId) -> bool {
        self.arena.contains(node)
    }

    fn descendant_elements(&self, root: NodeId) -> Result<Vec<NodeId>> {
        self.arena.node(root)?;
        Ok(query::descendant_elements(&self.arena, root))
    }

    fn is_equal_node(&self, a: NodeId, b: NodeId) -> bool {
        query::is_equal_node(&self.arena, a, b)
    }

    fn first_child_value(&self, node: NodeId) -> Option<&str> {
        let first = self.arena.first_child(node)?;
        self.arena.get(first)?.node_value()
    }

    fn text_content(&self, node: NodeId) -> Result<String> {
        self.arena.node(node)?;
        Ok(query::text_content(&self.arena, node))
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<()> {
        query::set_text_content(&mut self.arena, node, text)?;
        self.prune_listeners();
        trace!(?node, text, "set text");
        self.log(DomMutation::SetText {
            node,
            value: text.to_string(),
        });
        Ok(())
    }

    fn attributes(&self, node: NodeId) -> Result<Vec<(String, String)>> {
        let element = self
            .arena
            .node(node)?
            .as_element()
            .ok_or(DomError::NotAnElement(node))?;
        Ok(element
            .attributes
            .iter()
            .map(|attr| (attr.name.to_string(), attr.value.clone()))
            .collect())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        query::set_attribute(&mut self.arena, node, name, value)?;
        trace!(?node, name, value, "set attribute");
        self.log(DomMutation::SetAttribute {
            node,
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn inner_html(&self, node: NodeId) -> Result<String> {
        self.arena.node(node)?;
        Ok(serialize::inner_html(&self.arena, node))
    }
}

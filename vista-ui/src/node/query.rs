use super::arena::NodeArena;
use super::types::{Node, NodeId};
use crate::error::{DomError, Result};

/// Every element below `root` in document order (depth-first, pre-order).
/// `root` itself is not included. Equivalent to `querySelectorAll("*")`.
pub fn descendant_elements(arena: &NodeArena, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = arena.children(root).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        if arena.get(id).map(Node::is_element).unwrap_or(false) {
            out.push(id);
        }
        stack.extend(arena.children(id).iter().rev().copied());
    }
    out
}

/// Structural equality in the sense of DOM `isEqualNode`: node kind, tag,
/// attribute set (order does not matter) and pairwise-equal children.
pub fn is_equal_node(arena: &NodeArena, a: NodeId, b: NodeId) -> bool {
    if a == b {
        return arena.contains(a);
    }
    let (Some(left), Some(right)) = (arena.get(a), arena.get(b)) else {
        return false;
    };
    match (left, right) {
        (Node::Text(x), Node::Text(y)) => x == y,
        (Node::Element(x), Node::Element(y)) => {
            x.tag == y.tag
                && x.attributes.len() == y.attributes.len()
                && x
                    .attributes
                    .iter()
                    .all(|attr| y.attribute(&attr.name) == Some(attr.value.as_str()))
                && children_equal(arena, &x.children, &y.children)
        }
        (Node::Fragment(x), Node::Fragment(y)) => children_equal(arena, &x.children, &y.children),
        _ => false,
    }
}

fn children_equal(arena: &NodeArena, left: &[NodeId], right: &[NodeId]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| is_equal_node(arena, *l, *r))
}

/// Concatenated text of every text node below `id`, like DOM `textContent`.
pub fn text_content(arena: &NodeArena, id: NodeId) -> String {
    let mut out = String::new();
    collect_text(arena, id, &mut out);
    out
}

fn collect_text(arena: &NodeArena, id: NodeId, out: &mut String) {
    match arena.get(id) {
        Some(Node::Text(text)) => out.push_str(text),
        Some(_) => {
            for child in arena.children(id) {
                collect_text(arena, *child, out);
            }
        }
        None => {}
    }
}

/// Replace all children of `id` with a single text node. An empty string
/// leaves the node without children. On a text node, replaces its data.
pub fn set_text_content(arena: &mut NodeArena, id: NodeId, text: &str) -> Result<()> {
    if let Node::Text(data) = arena.node_mut(id)? {
        *data = text.to_string();
        return Ok(());
    }
    arena.clear_children(id)?;
    if !text.is_empty() {
        let child = arena.create(Node::text(text));
        arena.append_child(id, child)?;
    }
    Ok(())
}

pub fn set_attribute(arena: &mut NodeArena, id: NodeId, name: &str, value: &str) -> Result<()> {
    arena
        .node_mut(id)?
        .as_element_mut()
        .ok_or(DomError::NotAnElement(id))?
        .set_attribute(name, value);
    Ok(())
}

/// Nearest inclusive ancestor of `id` that is an element carrying `class`.
pub fn closest_with_class(arena: &NodeArena, id: NodeId, class: &str) -> Option<NodeId> {
    let mut current = Some(id);
    while let Some(node) = current {
        if arena
            .get(node)
            .and_then(Node::as_element)
            .map(|el| el.has_class(class))
            .unwrap_or(false)
        {
            return Some(node);
        }
        current = arena.parent(node);
    }
    None
}

/// First descendant element of `root` carrying `class`, in document order.
pub fn query_selector_class(arena: &NodeArena, root: NodeId, class: &str) -> Option<NodeId> {
    descendant_elements(arena, root).into_iter().find(|id| {
        arena
            .get(*id)
            .and_then(Node::as_element)
            .map(|el| el.has_class(class))
            .unwrap_or(false)
    })
}

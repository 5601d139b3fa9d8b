use super::types::{Node, NodeId};
use crate::error::{DomError, Result};

pub struct NodeArena {
    nodes: Vec<Option<Node>>,
    parents: Vec<Option<NodeId>>,
    generations: Vec<u32>,
    free_list: Vec<u32>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            parents: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn create(&mut self, node: Node) -> NodeId {
        let index = if let Some(idx) = self.free_list.pop() {
            idx as usize
        } else {
            self.nodes.len()
        };

        if index >= self.nodes.len() {
            self.nodes.push(Some(node));
            self.parents.push(None);
            self.generations.push(0);
        } else {
            self.nodes[index] = Some(node);
            self.parents[index] = None;
        }

        NodeId::new(index as u32, self.generations[index])
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        let idx = id.index as usize;
        (self.generations.get(idx) == Some(&id.generation)).then_some(idx)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(self.slot(id)?)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let idx = self.slot(id)?;
        self.nodes.get_mut(idx)?.as_mut()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        *self.parents.get(self.slot(node)?)?
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id).and_then(Node::children) {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        self.node_mut(parent)?
            .children_mut()
            .ok_or(DomError::NotAContainer(parent))?
            .push(child);
        self.parents[child.index as usize] = Some(parent);
        Ok(())
    }

    /// Moves every child of `source` to the front of `target`, keeping order.
    /// `source` is left empty.
    pub fn prepend_children_of(&mut self, target: NodeId, source: NodeId) -> Result<()> {
        let moved = std::mem::take(
            self.node_mut(source)?
                .children_mut()
                .ok_or(DomError::NotAContainer(source))?,
        );
        for child in &moved {
            self.parents[child.index as usize] = Some(target);
        }
        let children = self
            .node_mut(target)?
            .children_mut()
            .ok_or(DomError::NotAContainer(target))?;
        children.splice(0..0, moved);
        Ok(())
    }

    /// Disposes every descendant of `id`, leaving it without children.
    pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
        let removed = match self.node_mut(id)?.children_mut() {
            Some(children) => std::mem::take(children),
            None => return Ok(()),
        };
        for child in removed {
            self.dispose(child);
        }
        Ok(())
    }

    /// Disposes `id` and its whole subtree. The node is unlinked from its parent.
    pub fn dispose(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            if let Some(children) = self.get_mut(parent).and_then(Node::children_mut) {
                children.retain(|c| *c != id);
            }
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(idx) = self.slot(current) else {
                continue;
            };
            if let Some(node) = self.nodes[idx].take() {
                if let Some(children) = node.children() {
                    stack.extend(children.iter().copied());
                }
                self.parents[idx] = None;
                self.generations[idx] = self.generations[idx].wrapping_add(1);
                self.free_list.push(current.index);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

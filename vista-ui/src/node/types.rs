use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

/// Slot index plus generation. A disposed slot bumps its generation, so ids
/// held across a disposal never resolve to the node that reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }
}

pub type Name = SmartString<LazyCompact>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Name,
    pub value: String,
}

/// Attributes in source order. Names are unique within one element.
pub type Attributes = SmallVec<[Attribute; 4]>;

#[derive(Debug, Clone)]
pub struct ElementNode {
    pub tag: Name,
    pub attributes: Attributes,
    pub children: Vec<NodeId>,
}

impl ElementNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.as_str() == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|attr| attr.name.as_str() == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attributes.push(Attribute {
                name: name.into(),
                value: value.to_string(),
            }),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|list| list.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContainerNode {
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(ElementNode),
    Text(String),
    /// Detached container, produced by parsing markup.
    Fragment(ContainerNode),
}

impl Node {
    pub fn element(tag: &str) -> Self {
        Self::Element(ElementNode {
            tag: tag.to_ascii_lowercase().into(),
            attributes: Attributes::new(),
            children: vec![],
        })
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn fragment() -> Self {
        Self::Fragment(ContainerNode::default())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// DOM `nodeValue`: the data of a text node, nothing for containers.
    pub fn node_value(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn children(&self) -> Option<&Vec<NodeId>> {
        match self {
            Node::Element(el) => Some(&el.children),
            Node::Fragment(c) => Some(&c.children),
            Node::Text(_) => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Node::Element(el) => Some(&mut el.children),
            Node::Fragment(c) => Some(&mut c.children),
            Node::Text(_) => None,
        }
    }
}

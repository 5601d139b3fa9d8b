use super::types::NodeId;

/// A change applied to a live display tree, recorded in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomMutation {
    Clear {
        node: NodeId,
    },
    InsertMarkup {
        node: NodeId,
        markup: String,
    },
    SetText {
        node: NodeId,
        value: String,
    },
    SetAttribute {
        node: NodeId,
        name: String,
        value: String,
    },
}


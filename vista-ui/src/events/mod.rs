//! Click events for the in-memory document.
//!
//! Listeners are stored on the document but run with the document released,
//! so a handler is free to re-render views mounted in the same document.

use crate::error::{DomError, Result};
use crate::node::NodeId;
use crate::renderer::SharedDocument;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    /// Node the event was fired on.
    pub target: NodeId,
    /// Node whose listener is running.
    pub current_target: NodeId,
}

pub type ListenerFn = Rc<RefCell<dyn FnMut(&DomEvent, &SharedDocument)>>;

pub(crate) struct Listener {
    pub node: NodeId,
    pub kind: EventKind,
    pub callback: ListenerFn,
}

/// Fire a click on `target`, bubbling through its ancestors.
///
/// Returns how many listeners ran.
pub fn dispatch_click(document: &SharedDocument, target: NodeId) -> Result<usize> {
    dispatch(document, EventKind::Click, target)
}

pub fn dispatch(document: &SharedDocument, kind: EventKind, target: NodeId) -> Result<usize> {
    let path = {
        let doc = document.borrow();
        if !doc.arena().contains(target) {
            return Err(DomError::NodeNotFound(target));
        }
        doc.listeners_on_path(target, kind)
    };
    debug!(?target, listeners = path.len(), "dispatching {:?}", kind);

    let mut ran = 0;
    for (current_target, callback) in path {
        let event = DomEvent {
            kind,
            target,
            current_target,
        };
        match callback.try_borrow_mut() {
            Ok(mut listener) => {
                (&mut *listener)(&event, document);
                ran += 1;
            }
            Err(_) => warn!(?current_target, "skipping re-entrant listener"),
        }
    }
    Ok(ran)
}

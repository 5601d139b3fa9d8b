pub mod error;
pub mod events;
pub mod node;
pub mod renderer;
pub mod view;

pub use error::{DomError, MarkupError, Result};
pub use events::{dispatch_click, DomEvent, EventKind};
pub use node::NodeId;
pub use renderer::{DisplayTree, MemoryDocument, SharedDocument};
pub use view::{IconSet, PatchReport, RenderMode, View, ViewData, ViewEngine};

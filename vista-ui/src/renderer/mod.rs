mod memory;
mod traits;

pub use memory::{MemoryDocument, SharedDocument};
pub use traits::DisplayTree;

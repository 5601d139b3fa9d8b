mod engine;
mod fallback;
mod icons;
mod patch;
mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use engine::{RenderMode, ViewEngine};
pub use fallback::{error_markup, message_markup, spinner_markup};
pub use icons::IconSet;
pub use patch::{reconcile, PatchReport};
pub use traits::{View, ViewData, DEFAULT_ERROR_MESSAGE};

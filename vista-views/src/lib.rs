pub mod config;
pub mod model;
pub mod page;
pub mod pagination;
pub mod preview;
pub mod results;

pub use config::{ConfigError, ViewsConfig};
pub use model::{PageState, RecipePreview, SearchResults, SearchState};
pub use page::{SearchPage, PAGE_SKELETON};
pub use pagination::{Direction, PageControl, PaginationView};
pub use preview::PreviewView;
pub use results::ResultsView;

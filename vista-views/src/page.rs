//! Search page: results list and pagination sharing one document and one
//! search state. Pagination clicks re-render both views.

use crate::config::ViewsConfig;
use crate::model::{RecipePreview, SearchState};
use crate::pagination::PaginationView;
use crate::results::ResultsView;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use vista_ui::{PatchReport, Result, SharedDocument, ViewEngine};

/// Minimal markup carrying both mount points.
pub const PAGE_SKELETON: &str =
    r#"<div class="search-results"><ul class="results"></ul><div class="pagination"></div></div>"#;

pub struct SearchPage {
    results: ViewEngine<ResultsView>,
    pagination: ViewEngine<PaginationView>,
    state: SearchState,
}

impl SearchPage {
    /// Bind to `.results` and `.pagination` in `document` and wire the
    /// pagination buttons back to [`SearchPage::go_to_page`].
    pub fn attach(document: &SharedDocument, config: &ViewsConfig) -> Result<Rc<RefCell<Self>>> {
        let (results_mount, pagination_mount) = {
            let doc = document.borrow();
            (doc.mount_point("results")?, doc.mount_point("pagination")?)
        };

        let page = Rc::new(RefCell::new(Self {
            results: ViewEngine::new(
                ResultsView::from_config(config),
                document.clone(),
                results_mount,
                config.icons(),
            ),
            pagination: ViewEngine::new(
                PaginationView::new(config.icons()),
                document.clone(),
                pagination_mount,
                config.icons(),
            ),
            state: SearchState::new("", Vec::new(), config.results_per_page),
        }));

        let weak = Rc::downgrade(&page);
        PaginationView::add_handler_click(&page.borrow().pagination, move |target| {
            let Some(page) = weak.upgrade() else {
                return;
            };
            if let Err(err) = page.borrow_mut().go_to_page(target) {
                warn!(%err, page = target, "failed to switch page");
            }
        });

        Ok(page)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn results(&self) -> &ViewEngine<ResultsView> {
        &self.results
    }

    pub fn pagination(&self) -> &ViewEngine<PaginationView> {
        &self.pagination
    }

    pub fn show_loading(&self) -> Result<()> {
        self.results.render_spinner()
    }

    /// Start a new search and show its first page.
    pub fn show_results(&mut self, query: &str, results: Vec<RecipePreview>) -> Result<()> {
        info!(query, count = results.len(), "showing search results");
        self.state = SearchState::new(query, results, self.state.results_per_page);
        self.go_to_page(1)
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let results = self.state.page_results(page).to_vec();
        self.results.render(Some(results))?;
        self.pagination.render(Some(self.state.page_state()))
    }

    /// Mark `id` active and patch the current page in place.
    pub fn select(&mut self, id: &str) -> Result<PatchReport> {
        self.results.view_mut().set_active(Some(id.to_string()));
        self.results.update(self.state.current_results().to_vec())
    }
}

use serde::{Deserialize, Serialize};
use vista_ui::ViewData;

/// One search hit, as returned by the recipe API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePreview {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    /// Set on recipes the user uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RecipePreview {
    pub fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

impl ViewData for RecipePreview {}

/// Search response body: either a bare list or the API envelope
/// `{ "data": { "recipes": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResults {
    Bare(Vec<RecipePreview>),
    Envelope { data: RecipeList },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeList {
    pub recipes: Vec<RecipePreview>,
}

impl SearchResults {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn into_recipes(self) -> Vec<RecipePreview> {
        match self {
            SearchResults::Bare(recipes) => recipes,
            SearchResults::Envelope { data } => data.recipes,
        }
    }
}

/// Pagination payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page: usize,
    pub total_results: usize,
    pub results_per_page: usize,
}

impl ViewData for PageState {}

impl PageState {
    /// Zero results per page means there are no pages at all.
    pub fn total_pages(&self) -> usize {
        if self.results_per_page == 0 {
            return 0;
        }
        self.total_results.div_ceil(self.results_per_page)
    }
}

/// Results of one query plus the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<RecipePreview>,
    /// 1-based.
    pub page: usize,
    pub results_per_page: usize,
}

impl SearchState {
    pub fn new(query: impl Into<String>, results: Vec<RecipePreview>, results_per_page: usize) -> Self {
        Self {
            query: query.into(),
            results,
            page: 1,
            results_per_page,
        }
    }

    /// Make `page` current and return its slice of results. Pages past the
    /// end are empty.
    pub fn page_results(&mut self, page: usize) -> &[RecipePreview] {
        self.page = page;
        self.current_results()
    }

    /// Results on the current page.
    pub fn current_results(&self) -> &[RecipePreview] {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.results_per_page)
            .min(self.results.len());
        let end = self
            .page
            .saturating_mul(self.results_per_page)
            .min(self.results.len())
            .max(start);
        &self.results[start..end]
    }

    pub fn page_state(&self) -> PageState {
        PageState {
            page: self.page,
            total_results: self.results.len(),
            results_per_page: self.results_per_page,
        }
    }
}

#[cfg(test)]
pub(crate) fn recipe(n: usize) -> RecipePreview {
    RecipePreview {
        id: format!("r{n}"),
        title: format!("Recipe {n}"),
        publisher: "Kitchen".into(),
        image_url: format!("https://img.test/{n}.jpg"),
        key: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_bare_lists_parse() {
        let bare = r#"[{"id":"a","title":"Pizza","publisher":"P","image_url":"i.jpg"}]"#;
        let envelope = r#"{"status":"success","results":1,"data":{"recipes":[
            {"id":"a","title":"Pizza","publisher":"P","image_url":"i.jpg","key":"k1"}]}}"#;

        let bare = SearchResults::from_json(bare).unwrap().into_recipes();
        let envelope = SearchResults::from_json(envelope).unwrap().into_recipes();

        assert_eq!(bare[0].title, "Pizza");
        assert!(!bare[0].is_user_generated());
        assert_eq!(envelope[0].key.as_deref(), Some("k1"));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let state = PageState {
            page: 1,
            total_results: 23,
            results_per_page: 10,
        };
        assert_eq!(state.total_pages(), 3);
        assert_eq!(PageState { results_per_page: 0, ..state }.total_pages(), 0);
        assert_eq!(PageState { total_results: 0, ..state }.total_pages(), 0);
    }

    #[test]
    fn test_page_results_slices_and_tracks_page() {
        let mut state = SearchState::new("pizza", (1..=23).map(recipe).collect(), 10);

        assert_eq!(state.page_results(3).len(), 3);
        assert_eq!(state.page, 3);
        assert_eq!(state.current_results()[0].id, "r21");
        assert_eq!(state.page_results(1).last().unwrap().id, "r10");
        assert!(state.page_results(4).is_empty());
        assert!(state.page_results(0).is_empty());
    }
}

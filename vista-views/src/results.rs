use crate::config::ViewsConfig;
use crate::model::RecipePreview;
use crate::preview::PreviewView;
use vista_ui::{IconSet, View};

/// Search results list, mounted on `ul.results`.
///
/// Each record is rendered through [`PreviewView`] and the cards are
/// concatenated in order.
#[derive(Debug, Clone)]
pub struct ResultsView {
    preview: PreviewView,
    error_message: String,
    default_message: String,
}

impl ResultsView {
    pub fn new(icons: IconSet) -> Self {
        Self::from_config(&ViewsConfig {
            icons_url: icons.sprite_url().to_string(),
            ..ViewsConfig::default()
        })
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self {
            preview: PreviewView::new(config.icons()),
            error_message: config.results_error_message.clone(),
            default_message: config.results_default_message.clone(),
        }
    }

    pub fn preview(&self) -> &PreviewView {
        &self.preview
    }

    /// Highlight `id` on the next render or update.
    pub fn set_active(&mut self, id: Option<String>) {
        self.preview.set_active(id);
    }
}

impl View for ResultsView {
    type Data = Vec<RecipePreview>;

    fn generate_markup(&self, results: &Self::Data) -> String {
        results
            .iter()
            .filter_map(|result| self.preview.render_to_string(result))
            .collect()
    }

    fn error_message(&self) -> &str {
        &self.error_message
    }

    fn default_message(&self) -> &str {
        &self.default_message
    }
}

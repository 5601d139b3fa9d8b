use crate::model::RecipePreview;
use vista_ui::node::escape;
use vista_ui::{IconSet, View};

/// One search result as a `li.preview` card.
///
/// Not mounted on its own: the results list renders it to a string per
/// record. The active recipe's link carries `preview__link--active`.
#[derive(Debug, Clone, Default)]
pub struct PreviewView {
    icons: IconSet,
    active: Option<String>,
}

impl PreviewView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons, active: None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn set_active(&mut self, id: Option<String>) {
        self.active = id;
    }
}

impl View for PreviewView {
    type Data = RecipePreview;

    fn generate_markup(&self, recipe: &RecipePreview) -> String {
        let link_class = if self.active() == Some(recipe.id.as_str()) {
            "preview__link preview__link--active"
        } else {
            "preview__link"
        };
        let badge_class = if recipe.is_user_generated() {
            "preview__user-generated"
        } else {
            "preview__user-generated hidden"
        };

        format!(
            r##"
<li class="preview">
  <a class="{link_class}" href="#{id}">
    <figure class="preview__fig">
      <img src="{image}" alt="{title}" />
    </figure>
    <div class="preview__data">
      <h4 class="preview__title">{title}</h4>
      <p class="preview__publisher">{publisher}</p>
      <div class="{badge_class}">
        <svg>
          <use href="{icon}"></use>
        </svg>
      </div>
    </div>
  </a>
</li>
"##,
            id = escape(&recipe.id),
            image = escape(&recipe.image_url),
            title = escape(&recipe.title),
            publisher = escape(&recipe.publisher),
            icon = escape(&self.icons.href("user")),
        )
    }
}

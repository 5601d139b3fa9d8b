/// Icon sprite reference
///
/// Resolves icon names against one SVG sprite URL. The URL is opaque here and
/// only ever interpolated into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    sprite_url: String,
}

impl IconSet {
    pub fn new(sprite_url: impl Into<String>) -> Self {
        Self {
            sprite_url: sprite_url.into(),
        }
    }

    pub fn sprite_url(&self) -> &str {
        &self.sprite_url
    }

    /// `href` for a `<use>` element, e.g. `icons.svg#icon-loader`.
    pub fn href(&self, name: &str) -> String {
        format!("{}#icon-{}", self.sprite_url, name)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new("icons.svg")
    }
}

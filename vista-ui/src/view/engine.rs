use super::fallback;
use super::icons::IconSet;
use super::patch::{reconcile, PatchReport};
use super::traits::{View, ViewData};
use crate::error::Result;
use crate::node::NodeId;
use crate::renderer::{DisplayTree, MemoryDocument};
use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Whether `render_with` writes into the mount point or only returns markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Mount,
    Markup,
}

/// Reconciliation engine
///
/// Binds one concrete [`View`] to one mount point in a shared display tree
/// and drives it through full renders, positional updates and the fallback
/// displays. The mount point's content belongs to this engine; nothing else
/// should write into it.
pub struct ViewEngine<V: View, T: DisplayTree = MemoryDocument> {
    view: V,
    tree: Rc<RefCell<T>>,
    mount: NodeId,
    icons: IconSet,
    data: Option<V::Data>,
}

impl<V: View, T: DisplayTree> ViewEngine<V, T> {
    pub fn new(view: V, tree: Rc<RefCell<T>>, mount: NodeId, icons: IconSet) -> Self {
        Self {
            view,
            tree,
            mount,
            icons,
            data: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn mount(&self) -> NodeId {
        self.mount
    }

    /// Data from the last successful render or update.
    pub fn data(&self) -> Option<&V::Data> {
        self.data.as_ref()
    }

    pub fn tree(&self) -> &Rc<RefCell<T>> {
        &self.tree
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Replace the mount point's content with the markup for `data`.
    pub fn render(&mut self, data: Option<V::Data>) -> Result<()> {
        self.render_with(data, RenderMode::Mount).map(|_| ())
    }

    /// Markup for `data` without touching the tree.
    pub fn render_markup(&mut self, data: Option<V::Data>) -> Result<Option<String>> {
        self.render_with(data, RenderMode::Markup)
    }

    /// Absent or empty data shows the error display in either mode, leaves
    /// the stored data alone and returns `None`.
    pub fn render_with(&mut self, data: Option<V::Data>, mode: RenderMode) -> Result<Option<String>> {
        let Some(data) = data.filter(|data| !data.is_empty()) else {
            debug!(view = type_name::<V>(), "no data, showing error display");
            self.render_error(None)?;
            return Ok(None);
        };

        let markup = self.view.generate_markup(&data);
        self.data = Some(data);

        match mode {
            RenderMode::Markup => Ok(Some(markup)),
            RenderMode::Mount => {
                debug!(view = type_name::<V>(), mount = ?self.mount, bytes = markup.len(), "render");
                self.replace_content(&markup)?;
                Ok(None)
            }
        }
    }

    /// Patch the mounted elements towards the markup for `data`, pair by pair.
    ///
    /// Never inserts, removes or reorders elements. Meant to follow a
    /// `render` of structurally similar data.
    pub fn update(&mut self, data: V::Data) -> Result<PatchReport> {
        let markup = self.view.generate_markup(&data);
        self.data = Some(data);

        let mut tree = self.tree.borrow_mut();
        let fragment = tree.parse_fragment(&markup)?;
        let report = reconcile(&mut *tree, fragment, self.mount);
        tree.release(fragment);

        let report = report?;
        debug!(
            view = type_name::<V>(),
            compared = report.compared,
            text = report.text_patches,
            attributes = report.attribute_writes,
            "update"
        );
        Ok(report)
    }

    pub fn clear(&self) -> Result<()> {
        self.tree.borrow_mut().clear(self.mount)
    }

    pub fn render_spinner(&self) -> Result<()> {
        self.replace_content(&fallback::spinner_markup(&self.icons))
    }

    /// Error display with `message`, or the view's error message.
    pub fn render_error(&self, message: Option<&str>) -> Result<()> {
        let message = message.unwrap_or_else(|| self.view.error_message());
        self.replace_content(&fallback::error_markup(&self.icons, message))
    }

    /// Message display with `message`, or the view's default message.
    pub fn render_message(&self, message: Option<&str>) -> Result<()> {
        let message = message.unwrap_or_else(|| self.view.default_message());
        self.replace_content(&fallback::message_markup(&self.icons, message))
    }

    /// Serialized content of the mount point.
    pub fn html(&self) -> Result<String> {
        self.tree.borrow().inner_html(self.mount)
    }

    fn replace_content(&self, markup: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        tree.clear(self.mount)?;
        tree.insert_markup(self.mount, markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomError;
    use crate::renderer::SharedDocument;
    use crate::view::test_utils::ListView;

    fn mounted() -> ViewEngine<ListView> {
        let doc: SharedDocument = MemoryDocument::from_markup(r#"<ul class="list"><li>stale</li></ul>"#)
            .unwrap()
            .shared();
        let mount = doc.borrow().mount_point("list").unwrap();
        ViewEngine::new(ListView::default(), doc, mount, IconSet::new("i.svg"))
    }

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_absent_data_shows_error_without_markup() {
        let mut engine = mounted();
        engine.render(None).unwrap();

        let html = engine.html().unwrap();
        assert!(html.contains(r#"<div class="error">"#));
        assert!(html.contains("<p>Nothing to list</p>"));
        assert!(!html.contains("stale"));
        assert_eq!(engine.view().calls(), 0);
        assert!(engine.data().is_none());
    }

    #[test]
    fn test_render_empty_data_keeps_previous_data() {
        let mut engine = mounted();
        engine.render(Some(items(&["a"]))).unwrap();
        engine.render(Some(vec![])).unwrap();

        assert!(engine.html().unwrap().contains("Nothing to list"));
        assert_eq!(engine.view().calls(), 1);
        assert_eq!(engine.data(), Some(&items(&["a"])));
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut engine = mounted();
        engine.render(Some(items(&["a", "b"]))).unwrap();
        assert_eq!(engine.html().unwrap(), "<li>a</li><li>b</li>");

        engine.render(Some(items(&["c"]))).unwrap();
        assert_eq!(engine.html().unwrap(), "<li>c</li>");
    }

    #[test]
    fn test_render_markup_leaves_mount_point_alone() {
        let mut engine = mounted();
        let markup = engine.render_markup(Some(items(&["x"]))).unwrap();

        assert_eq!(markup.as_deref(), Some("<li>x</li>"));
        assert_eq!(engine.html().unwrap(), "<li>stale</li>");
        assert_eq!(engine.data(), Some(&items(&["x"])));
    }

    #[test]
    fn test_render_markup_of_empty_data_still_shows_error() {
        let mut engine = mounted();
        let markup = engine.render_markup(Some(vec![])).unwrap();

        assert_eq!(markup, None);
        assert!(engine.html().unwrap().contains(r#"<div class="error">"#));
    }

    #[test]
    fn test_render_twice_matches_render_once() {
        let mut engine = mounted();
        engine.render(Some(items(&["a", "b"]))).unwrap();
        let once = engine.html().unwrap();
        engine.render(Some(items(&["a", "b"]))).unwrap();
        assert_eq!(engine.html().unwrap(), once);
    }

    #[test]
    fn test_update_patches_in_place() {
        let mut engine = mounted();
        engine.render(Some(items(&["a", "b"]))).unwrap();
        let first_li = {
            let tree = engine.tree().borrow();
            tree.arena().children(engine.mount())[0]
        };

        let report = engine.update(items(&["a", "z"])).unwrap();

        assert_eq!(engine.html().unwrap(), "<li>a</li><li>z</li>");
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.text_patches, 1);
        assert!(engine.tree().borrow().contains(first_li));
        assert_eq!(engine.data(), Some(&items(&["a", "z"])));
    }

    #[test]
    fn test_update_does_not_add_elements() {
        let mut engine = mounted();
        engine.render(Some(items(&["a"]))).unwrap();
        let report = engine.update(items(&["a", "b"])).unwrap();

        assert_eq!(engine.html().unwrap(), "<li>a</li>");
        assert_eq!(report.unmatched_candidates, 1);
    }

    #[test]
    fn test_fallback_displays() {
        let engine = mounted();

        engine.render_spinner().unwrap();
        assert!(engine.html().unwrap().contains(r##"<use href="i.svg#icon-loader"></use>"##));

        engine.render_message(None).unwrap();
        let html = engine.html().unwrap();
        assert!(html.contains(r#"<div class="message">"#));
        assert!(html.contains("<p></p>"));

        engine.render_error(Some("Offline & sad")).unwrap();
        let html = engine.html().unwrap();
        assert!(html.contains("<p>Offline &amp; sad</p>"));
        assert!(!html.contains("spinner"));

        engine.clear().unwrap();
        assert_eq!(engine.html().unwrap(), "");
    }

    #[test]
    fn test_render_into_released_mount_fails() {
        let doc = MemoryDocument::new().shared();
        let ghost = doc.borrow_mut().parse_fragment("<div></div>").unwrap();
        doc.borrow_mut().release(ghost);

        let mut engine = ViewEngine::new(ListView::default(), doc, ghost, IconSet::default());
        assert_eq!(
            engine.render(Some(items(&["a"]))).unwrap_err(),
            DomError::NodeNotFound(ghost)
        );
    }
}

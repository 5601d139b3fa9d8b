// Integration tests for the view engine against an in-memory document.
// Two views share one page; clicks are dispatched through the document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vista_ui::node::escape;
use vista_ui::{
    dispatch_click, DisplayTree, EventKind, IconSet, MemoryDocument, SharedDocument, View,
    ViewEngine,
};

struct Counter {
    label: String,
    value: u32,
}

impl vista_ui::ViewData for Counter {}

/// `<div class="counter"><h2>label</h2><span class="value">n</span><button>+</button></div>`
#[derive(Default)]
struct CounterView {
    renders: Cell<usize>,
}

impl View for CounterView {
    type Data = Counter;

    fn generate_markup(&self, data: &Counter) -> String {
        self.renders.set(self.renders.get() + 1);
        format!(
            r#"<div class="counter" data-value="{value}"><h2>{}</h2><span class="value">{value}</span><button class="btn--inline">+</button></div>"#,
            escape(&data.label),
            value = data.value,
        )
    }
}

struct Tags;

impl View for Tags {
    type Data = Vec<String>;

    fn generate_markup(&self, data: &Self::Data) -> String {
        data.iter()
            .map(|tag| format!(r#"<li class="tag">{}</li>"#, escape(tag)))
            .collect()
    }

    fn error_message(&self) -> &str {
        "No tags yet"
    }

    fn default_message(&self) -> &str {
        "Add a tag to get started"
    }
}

fn page() -> SharedDocument {
    MemoryDocument::from_markup(
        r#"<main><section class="counter-host"></section><ul class="tags"></ul></main>"#,
    )
    .unwrap()
    .shared()
}

fn counter(label: &str, value: u32) -> Counter {
    Counter {
        label: label.to_string(),
        value,
    }
}

#[test]
fn test_views_share_one_document() {
    let doc = page();
    let counter_mount = doc.borrow().mount_point("counter-host").unwrap();
    let tags_mount = doc.borrow().mount_point("tags").unwrap();

    let mut counter_view = ViewEngine::new(CounterView::default(), doc.clone(), counter_mount, IconSet::default());
    let mut tags = ViewEngine::new(Tags, doc.clone(), tags_mount, IconSet::default());

    counter_view.render(Some(counter("Clicks", 0))).unwrap();
    tags.render(Some(vec!["rust".into(), "views".into()])).unwrap();

    let html = doc.borrow().html();
    assert!(html.contains(r#"<span class="value">0</span>"#));
    assert!(html.contains(r#"<ul class="tags"><li class="tag">rust</li><li class="tag">views</li></ul>"#));

    tags.render(Some(vec![])).unwrap();
    assert!(doc.borrow().html().contains("No tags yet"));
    // The other mount point is untouched.
    assert!(doc.borrow().html().contains(r#"<span class="value">0</span>"#));
}

#[test]
fn test_update_keeps_element_identity() {
    let doc = page();
    let mount = doc.borrow().mount_point("counter-host").unwrap();
    let mut engine = ViewEngine::new(CounterView::default(), doc.clone(), mount, IconSet::default());
    engine.render(Some(counter("Clicks", 1))).unwrap();

    let span = doc.borrow().query_selector_class("value").unwrap();
    let report = engine.update(counter("Clicks", 2)).unwrap();

    let d = doc.borrow();
    assert_eq!(d.query_selector_class("value"), Some(span));
    assert_eq!(
        d.inner_html_of(mount),
        r#"<div class="counter" data-value="2"><h2>Clicks</h2><span class="value">2</span><button class="btn--inline">+</button></div>"#
    );
    assert_eq!(report.text_patches, 1);
    assert_eq!(report.attribute_writes, 2);
    assert_eq!(report.unchanged, 2);
}

#[test]
fn test_render_markup_composes_without_mounting() {
    let doc = page();
    let mount = doc.borrow().mount_point("tags").unwrap();
    let mut engine = ViewEngine::new(Tags, doc.clone(), mount, IconSet::default());

    let markup = engine.render_markup(Some(vec!["a".into()])).unwrap();
    assert_eq!(markup.as_deref(), Some(r#"<li class="tag">a</li>"#));
    assert_eq!(engine.view().render_to_string(&vec![]), None);
    assert_eq!(doc.borrow().inner_html_of(mount), "");
}

#[test]
fn test_click_handler_can_rerender_its_view() {
    let doc = page();
    let mount = doc.borrow().mount_point("counter-host").unwrap();
    let engine = Rc::new(RefCell::new(ViewEngine::new(
        CounterView::default(),
        doc.clone(),
        mount,
        IconSet::default(),
    )));
    engine.borrow_mut().render(Some(counter("Clicks", 0))).unwrap();

    let handle = engine.clone();
    doc.borrow_mut().add_event_listener(mount, EventKind::Click, move |_, _| {
        let mut engine = handle.borrow_mut();
        let next = engine.data().map(|c| c.value + 1).unwrap_or(0);
        engine.update(counter("Clicks", next)).unwrap();
    });

    for _ in 0..3 {
        let button = doc.borrow().query_selector_class("btn--inline").unwrap();
        assert_eq!(dispatch_click(&doc, button).unwrap(), 1);
    }

    assert!(doc.borrow().html().contains(r#"<span class="value">3</span>"#));
    assert_eq!(engine.borrow().view().renders.get(), 4);
}

#[test]
fn test_message_display_uses_view_default() {
    let doc = page();
    let mount = doc.borrow().mount_point("tags").unwrap();
    let engine = ViewEngine::new(Tags, doc.clone(), mount, IconSet::new("sprite.svg"));

    engine.render_message(None).unwrap();

    let html = engine.html().unwrap();
    assert!(html.contains("<p>Add a tag to get started</p>"));
    assert!(html.contains("sprite.svg#icon-smile"));
    assert!(doc.borrow().descendant_elements(mount).unwrap().len() > 1);
}

use crate::model::PageState;
use tracing::debug;
use vista_ui::node::escape;
use vista_ui::{EventKind, IconSet, View, ViewEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// One pagination button: which way it points and the page it goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub direction: Direction,
    pub target: usize,
}

/// Previous/next buttons, mounted on `div.pagination`.
#[derive(Debug, Clone, Default)]
pub struct PaginationView {
    icons: IconSet,
}

impl PaginationView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    /// Buttons to show for `state`, in display order. First matching rule wins:
    /// the first of several pages gets next only, the last gets previous
    /// only, any page before the last gets both, and a single page gets none.
    pub fn controls(state: &PageState) -> Vec<PageControl> {
        let pages = state.total_pages();
        let page = state.page;
        let prev = PageControl {
            direction: Direction::Prev,
            target: page.saturating_sub(1),
        };
        let next = PageControl {
            direction: Direction::Next,
            target: page + 1,
        };

        if page == 1 && pages > 1 {
            vec![next]
        } else if page == pages && pages > 1 {
            vec![prev]
        } else if page < pages {
            vec![prev, next]
        } else {
            vec![]
        }
    }

    /// Route clicks on the mounted buttons to `handler` with the target page.
    ///
    /// The listener sits on the mount point, so it survives re-renders.
    /// Clicks outside a `.btn--inline` or without a numeric `data-goto` are
    /// dropped.
    pub fn add_handler_click<F>(engine: &ViewEngine<Self>, mut handler: F)
    where
        F: FnMut(usize) + 'static,
    {
        let mount = engine.mount();
        engine
            .tree()
            .borrow_mut()
            .add_event_listener(mount, EventKind::Click, move |event, document| {
                let goto = {
                    let doc = document.borrow();
                    let Some(button) = doc.closest_with_class(event.target, "btn--inline") else {
                        debug!(node = ?event.target, "click outside pagination buttons");
                        return;
                    };
                    doc.attribute(button, "data-goto")
                        .and_then(|value| value.trim().parse::<usize>().ok())
                };

                match goto {
                    Some(page) => {
                        debug!(page, "pagination click");
                        handler(page);
                    }
                    None => debug!("pagination button without a page target"),
                }
            });
    }

    fn button_markup(&self, control: PageControl) -> String {
        let (class, icon) = match control.direction {
            Direction::Prev => ("pagination__btn--prev", "arrow-left"),
            Direction::Next => ("pagination__btn--next", "arrow-right"),
        };
        let label = format!("<span>Page {}</span>", control.target);
        let svg = format!(
            r#"<svg class="search__icon">
    <use href="{}"></use>
  </svg>"#,
            escape(&self.icons.href(icon))
        );
        let (first, second) = match control.direction {
            Direction::Prev => (svg, label),
            Direction::Next => (label, svg),
        };

        format!(
            r#"
<button data-goto="{target}" class="btn--inline {class}">
  {first}
  {second}
</button>
"#,
            target = control.target,
        )
    }
}

impl View for PaginationView {
    type Data = PageState;

    fn generate_markup(&self, state: &PageState) -> String {
        Self::controls(state)
            .into_iter()
            .map(|control| self.button_markup(control))
            .collect()
    }
}

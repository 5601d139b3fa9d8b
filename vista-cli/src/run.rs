use crate::cli::Click;
use anyhow::{bail, Context, Result};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, warn};
use vista_ui::{dispatch_click, MemoryDocument, SharedDocument};
use vista_views::{RecipePreview, SearchPage, SearchResults, ViewsConfig, PAGE_SKELETON};

pub struct RenderOptions {
    pub query: String,
    pub page: usize,
    pub active: Option<String>,
}

/// Outcome of one click while browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Moved { click: Click, page: usize },
    /// The button was not on the page, nothing happened.
    Missing { click: Click, page: usize },
}

pub struct Rendered {
    pub html: String,
    pub page: usize,
    pub total_pages: usize,
    pub clicks: Vec<ClickOutcome>,
}

pub fn load_recipes(file: &Path) -> Result<Vec<RecipePreview>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let recipes = SearchResults::from_json(&raw)
        .with_context(|| format!("{} is not a recipe list", file.display()))?
        .into_recipes();
    debug!(count = recipes.len(), "loaded recipes");
    Ok(recipes)
}

pub fn load_config(path: Option<&Path>) -> Result<ViewsConfig> {
    let mut config = match path {
        Some(path) => ViewsConfig::load(path)?,
        None => ViewsConfig::default(),
    };
    config.apply_env("VISTA")?;
    Ok(config)
}

fn mount_page(config: &ViewsConfig) -> Result<(SharedDocument, Rc<RefCell<SearchPage>>)> {
    let document = MemoryDocument::from_markup(PAGE_SKELETON)?.shared();
    let page = SearchPage::attach(&document, config)?;
    Ok((document, page))
}

pub fn render(recipes: Vec<RecipePreview>, config: &ViewsConfig, options: RenderOptions) -> Result<Rendered> {
    let (document, page) = mount_page(config)?;
    {
        let mut page = page.borrow_mut();
        page.show_results(&options.query, recipes)?;
        if options.page != 1 {
            let total_pages = page.state().page_state().total_pages();
            if !(1..=total_pages).contains(&options.page) {
                bail!(
                    "page {} is out of range, valid pages are 1..={}",
                    options.page,
                    total_pages.max(1)
                );
            }
            page.go_to_page(options.page)
                .with_context(|| format!("Failed to show page {}", options.page))?;
        }
        if let Some(id) = &options.active {
            let report = page.select(id)?;
            debug!(?report, id, "selected recipe");
        }
    }

    let state = page.borrow().state().page_state();
    let html = document.borrow().html();
    Ok(Rendered {
        html,
        page: state.page,
        total_pages: state.total_pages(),
        clicks: Vec::new(),
    })
}

pub fn browse(recipes: Vec<RecipePreview>, config: &ViewsConfig, query: &str, clicks: &[Click]) -> Result<Rendered> {
    let (document, page) = mount_page(config)?;
    page.borrow_mut().show_results(query, recipes)?;

    let mut outcomes = Vec::with_capacity(clicks.len());
    for &click in clicks {
        let button = document.borrow().query_selector_class(click.button_class());
        match button {
            Some(button) => {
                dispatch_click(&document, button)?;
                outcomes.push(ClickOutcome::Moved {
                    click,
                    page: page.borrow().state().page,
                });
            }
            None => {
                let current = page.borrow().state().page;
                warn!(%click, page = current, "no such button on this page");
                outcomes.push(ClickOutcome::Missing { click, page: current });
            }
        }
    }

    let state = page.borrow().state().page_state();
    let html = document.borrow().html();
    Ok(Rendered {
        html,
        page: state.page,
        total_pages: state.total_pages(),
        clicks: outcomes,
    })
}

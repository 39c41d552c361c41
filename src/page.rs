use std::cell::RefCell;
use std::rc::Rc;
use anyhow::{anyhow, Context};
use scraper::{Html, Selector};
use crate::markup::Node;

/// An element on the [`Page`], that starts a fetch when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// The text of the element
    pub label: String,
    /// The unresolved url, exactly as written in the url attribute
    pub url: String,
}

impl Trigger {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A handle to an area of the page, whose content is replaced as a whole on every write \
/// Cloned handles refer to the same region.
#[derive(Debug, Clone, Default)]
pub struct DisplayRegion {
    selector: String,
    content: Rc<RefCell<Vec<Node>>>,
}

impl DisplayRegion {

    /// Creates an empty region, that is not backed by a page element
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            selector: name.into(),
            content: Default::default(),
        }
    }

    /// The selector (or name), this region was created with
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn replace(&self, nodes: Vec<Node>) {
        *self.content.borrow_mut() = nodes;
    }

    pub fn clear(&self) {
        self.content.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.content.borrow().is_empty()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.content.borrow().clone()
    }

    pub fn inner_html(&self) -> String {
        self.content.borrow().iter().map(Node::to_html).collect()
    }

    pub fn text(&self) -> String {
        self.content.borrow().iter().map(Node::text_content).collect()
    }

}

/// A parsed html document, from which triggers and display regions are looked up once at startup
#[derive(Debug, Clone)]
pub struct Page {
    html: Html,
}

impl Page {

    pub fn parse(document: &str) -> Self {
        Self {
            html: Html::parse_document(document),
        }
    }

    /// Finds all elements matching `selector`, that have the `url_attribute` set
    pub fn triggers(&self, selector: &str, url_attribute: &str) -> anyhow::Result<Vec<Trigger>> {
        let selector = parse_selector(selector)?;
        let triggers = self.html.select(&selector)
            .filter_map(|element| {
                let url = element.attr(url_attribute)?;
                let label = element.text()
                    .collect::<String>()
                    .trim()
                    .to_string();
                Some(Trigger::new(label, url))
            })
            .collect();
        Ok(triggers)
    }

    /// Looks up the first element matching `selector` as a [`DisplayRegion`], keeping its current content
    pub fn region(&self, selector: &str) -> anyhow::Result<DisplayRegion> {
        let parsed_selector = parse_selector(selector)?;
        let element = self.html.select(&parsed_selector)
            .next()
            .with_context(|| format!("Expected display region matching {selector:?}"))?;
        let region = DisplayRegion::detached(selector);
        let existing_markup = element.inner_html();
        if !existing_markup.trim().is_empty() {
            region.replace(vec![Node::Raw(existing_markup)]);
        }
        Ok(region)
    }

}

fn parse_selector(selector: &str) -> anyhow::Result<Selector> {
    Selector::parse(selector).map_err(|err| anyhow!("Invalid selector {selector:?}: {err:?}"))
}

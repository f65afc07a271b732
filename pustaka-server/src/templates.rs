//! Askama templates for the HTML pages

use askama::Template;
use pustaka_core::{Book, Envelope, Item};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Envelope<Vec<Book>>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub book: Book,
}

/// Author, category or tag page with one page of its books
#[derive(Template)]
#[template(path = "entity.html")]
pub struct EntityTemplate {
    /// Singular label, e.g. `author`
    pub kind: &'static str,
    pub page: Envelope<Item>,
}

/// Distinct items offered as browse filters
#[derive(Debug, Default)]
pub struct FilterLists {
    pub authors: Vec<Item>,
    pub categories: Vec<Item>,
    pub tags: Vec<Item>,
}

impl FilterLists {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }
}

#[derive(Template)]
#[template(path = "filter.html")]
pub struct FilterTemplate {
    pub page: Envelope<FilterLists>,
}

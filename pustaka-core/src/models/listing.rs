//! Homogeneous result lists

use serde::Serialize;

use super::{Book, Entity, Item};

/// Rows returned by an entity-agnostic query: all books or all items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Books(Vec<Book>),
    Items(Vec<Item>),
}

impl Listing {
    /// Empty listing of the right kind for `entity`.
    pub fn empty(entity: Entity) -> Self {
        if entity.is_item() {
            Self::Items(Vec::new())
        } else {
            Self::Books(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Books(books) => books.len(),
            Self::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Books, or an empty list if this is an item listing.
    pub fn into_books(self) -> Vec<Book> {
        match self {
            Self::Books(books) => books,
            Self::Items(_) => Vec::new(),
        }
    }

    /// Items, or an empty list if this is a book listing.
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Self::Items(items) => items,
            Self::Books(_) => Vec::new(),
        }
    }
}

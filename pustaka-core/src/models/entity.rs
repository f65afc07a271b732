//! The closed set of catalog tables

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A catalog table.
///
/// The table and column identifiers below are the only text ever
/// interpolated into SQL; everything a caller supplies is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Books,
    Authors,
    Categories,
    Tags,
}

impl Entity {
    /// Item tables, in the order a book's relations are assembled.
    pub const ITEM_KINDS: [Entity; 3] = [Entity::Authors, Entity::Categories, Entity::Tags];

    /// Table name.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Authors => "authors",
            Self::Categories => "categories",
            Self::Tags => "tags",
        }
    }

    /// Column list in row-mapper order.
    pub const fn columns(self) -> &'static str {
        match self {
            Self::Books => "id, title, image_url, gramed_url, description",
            Self::Authors | Self::Categories | Self::Tags => "id, book_id, name",
        }
    }

    /// Number of columns in [`Entity::columns`].
    pub const fn column_count(self) -> usize {
        match self {
            Self::Books => 5,
            Self::Authors | Self::Categories | Self::Tags => 3,
        }
    }

    /// Ordering used by top-level listings.
    pub const fn listing_order(self) -> &'static str {
        match self {
            Self::Books => "id",
            Self::Authors | Self::Categories | Self::Tags => "name, id",
        }
    }

    /// Singular URL segment (`/api/author/{id}`).
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::Books => "book",
            Self::Authors => "author",
            Self::Categories => "category",
            Self::Tags => "tag",
        }
    }

    /// True for author/category/tag tables.
    pub const fn is_item(self) -> bool {
        !matches!(self, Self::Books)
    }

    /// Parse an item table name, rejecting `books`.
    pub fn parse_item(s: &str) -> Result<Self, CatalogError> {
        let entity: Entity = s.parse()?;
        if !entity.is_item() {
            return Err(CatalogError::invalid_parameter(
                "filter",
                "must be one of 'authors', 'categories', 'tags'",
            ));
        }
        Ok(entity)
    }
}

impl FromStr for Entity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "books" => Ok(Self::Books),
            "authors" => Ok(Self::Authors),
            "categories" => Ok(Self::Categories),
            "tags" => Ok(Self::Tags),
            other => Err(CatalogError::invalid_parameter(
                "entity",
                format!("unknown entity '{other}'"),
            )),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tables() {
        assert_eq!("books".parse::<Entity>().unwrap(), Entity::Books);
        assert_eq!("authors".parse::<Entity>().unwrap(), Entity::Authors);
        assert_eq!("categories".parse::<Entity>().unwrap(), Entity::Categories);
        assert_eq!("tags".parse::<Entity>().unwrap(), Entity::Tags);
    }

    #[test]
    fn rejects_unknown_and_injected_names() {
        for raw in ["Books", "author", "", "books; DROP TABLE books", "users"] {
            let err = raw.parse::<Entity>().unwrap_err();
            assert!(matches!(err, CatalogError::InvalidParameter { name: "entity", .. }));
        }
    }

    #[test]
    fn parse_item_rejects_books() {
        assert_eq!(Entity::parse_item("tags").unwrap(), Entity::Tags);
        let err = Entity::parse_item("books").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter { name: "filter", .. }));
    }

    #[test]
    fn column_count_matches_column_list() {
        for entity in [Entity::Books, Entity::Authors, Entity::Categories, Entity::Tags] {
            assert_eq!(entity.columns().split(", ").count(), entity.column_count());
        }
    }

    #[test]
    fn display_is_table_name() {
        assert_eq!(Entity::Categories.to_string(), "categories");
        assert_eq!(Entity::Categories.route_segment(), "category");
    }
}

//! Book and item records

use serde::Serialize;
use utoipa::ToSchema;

/// A row of `books` with its relations attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    /// External reader link
    pub gramed_url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Item>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Item>,
}

/// An author, category or tag.
///
/// Item tables hold one row per (item, book) pairing, so the same `id`
/// recurs once per associated book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Item {
    pub id: i32,
    /// Book of the join row this item was read from. Contextual, not a
    /// property of the item itself.
    #[serde(skip)]
    pub book_id: i32,
    pub name: String,
    /// Attached on single-item lookups
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_omits_empty_relations() {
        let book = Book {
            id: 1,
            title: "Laskar Pelangi".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Laskar Pelangi",
                "image_url": "",
                "gramed_url": "",
                "description": ""
            })
        );
    }

    #[test]
    fn item_hides_book_id() {
        let item = Item {
            id: 7,
            book_id: 1,
            name: "Andrea Hirata".into(),
            books: vec![],
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "id": 7, "name": "Andrea Hirata" }));
    }

    #[test]
    fn item_schema_matches_json_shape() {
        let schema = serde_json::to_value(<Item as utoipa::PartialSchema>::schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("name").is_some());
        assert!(properties.get("books").is_some());
        assert!(properties.get("book_id").is_none());
    }

    #[test]
    fn mutually_nested_schemas_collect() {
        let mut schemas = Vec::new();
        <Book as ToSchema>::schemas(&mut schemas);
        assert!(schemas.iter().any(|(name, _)| name == "Item"));
    }
}

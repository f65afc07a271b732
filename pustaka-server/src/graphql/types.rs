//! GraphQL object types
//!
//! Thin wrappers over the core records. An item's `books` field hits the
//! database only when a query selects it.

use async_graphql::{Context, Object, Result};
use pustaka_core::{Dao, Entity, Item};

use super::schema::{to_gql_error, window};

/// GraphQL representation of a book
pub struct Book(pub pustaka_core::Book);

#[Object(rename_fields = "snake_case")]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Cover image
    async fn image_url(&self) -> &str {
        &self.0.image_url
    }

    /// External reader link
    async fn gramed_url(&self) -> &str {
        &self.0.gramed_url
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    /// Attached on single-book lookups; empty in listings
    async fn authors(&self) -> Vec<Author> {
        self.0.authors.iter().cloned().map(Author).collect()
    }

    async fn categories(&self) -> Vec<Category> {
        self.0.categories.iter().cloned().map(Category).collect()
    }

    async fn tags(&self) -> Vec<Tag> {
        self.0.tags.iter().cloned().map(Tag).collect()
    }
}

macro_rules! item_object {
    ($name:ident, $entity:expr, $doc:literal) => {
        #[doc = $doc]
        pub struct $name(pub Item);

        #[Object(rename_fields = "snake_case", rename_args = "snake_case")]
        impl $name {
            async fn id(&self) -> i32 {
                self.0.id
            }

            async fn name(&self) -> &str {
                &self.0.name
            }

            /// Books associated with this item
            async fn books(
                &self,
                ctx: &Context<'_>,
                #[graphql(default = 1)] page: i32,
                #[graphql(default = 20)] per_page: i32,
            ) -> Result<Vec<Book>> {
                let window = window(page, per_page)?;
                let books = ctx
                    .data::<Dao>()?
                    .get_item_books($entity, self.0.id, window)
                    .await
                    .map_err(to_gql_error)?;
                Ok(books.into_iter().map(Book).collect())
            }
        }
    };
}

item_object!(Author, Entity::Authors, "GraphQL representation of an author");
item_object!(Category, Entity::Categories, "GraphQL representation of a category");
item_object!(Tag, Entity::Tags, "GraphQL representation of a tag");

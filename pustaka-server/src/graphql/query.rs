//! Root query object

use async_graphql::{Context, Object, Result};
use pustaka_core::{Dao, Entity};

use super::schema::{to_gql_error, window};
use super::types::{Author, Book, Category, Tag};

/// Root query object for GraphQL
pub struct Query;

#[Object(rename_args = "snake_case")]
impl Query {
    /// Get a book by id, with its authors, categories and tags
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Book>> {
        let dao = ctx.data::<Dao>()?;
        let book = dao.get_book_by_id(id).await.map_err(to_gql_error)?;
        Ok(book.map(Book))
    }

    /// Get an author by id
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Author>> {
        let item = ctx
            .data::<Dao>()?
            .find_item(Entity::Authors, id)
            .await
            .map_err(to_gql_error)?;
        Ok(item.map(Author))
    }

    /// Get a category by id
    async fn category(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Category>> {
        let item = ctx
            .data::<Dao>()?
            .find_item(Entity::Categories, id)
            .await
            .map_err(to_gql_error)?;
        Ok(item.map(Category))
    }

    /// Get a tag by id
    async fn tag(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Tag>> {
        let item = ctx
            .data::<Dao>()?
            .find_item(Entity::Tags, id)
            .await
            .map_err(to_gql_error)?;
        Ok(item.map(Tag))
    }

    /// Page of books ordered by id
    async fn all_books(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 20)] per_page: i32,
    ) -> Result<Vec<Book>> {
        let window = window(page, per_page)?;
        let books = ctx
            .data::<Dao>()?
            .list_books(window)
            .await
            .map_err(to_gql_error)?;
        Ok(books.into_iter().map(Book).collect())
    }

    async fn all_authors(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 20)] per_page: i32,
    ) -> Result<Vec<Author>> {
        let items = distinct(ctx, Entity::Authors, page, per_page).await?;
        Ok(items.into_iter().map(Author).collect())
    }

    async fn all_categories(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 20)] per_page: i32,
    ) -> Result<Vec<Category>> {
        let items = distinct(ctx, Entity::Categories, page, per_page).await?;
        Ok(items.into_iter().map(Category).collect())
    }

    async fn all_tags(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 20)] per_page: i32,
    ) -> Result<Vec<Tag>> {
        let items = distinct(ctx, Entity::Tags, page, per_page).await?;
        Ok(items.into_iter().map(Tag).collect())
    }
}

async fn distinct(
    ctx: &Context<'_>,
    entity: Entity,
    page: i32,
    per_page: i32,
) -> Result<Vec<pustaka_core::Item>> {
    let window = window(page, per_page)?;
    ctx.data::<Dao>()?
        .get_distinct_items(entity, window)
        .await
        .map_err(to_gql_error)
}

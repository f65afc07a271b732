//! Relation fan-out
//!
//! Related rows are fetched with one secondary query per related table
//! and merged in memory. Queries run one after another; the first failure
//! aborts the assembly, so a record is never returned half-attached.

use sqlx::PgPool;

use super::{query, rows, Filter};
use crate::error::Result;
use crate::models::{Book, Entity, Item, Window};

/// Fetch the authors, categories and tags of `book`.
///
/// On error `book` is left untouched.
pub async fn attach_items(pool: &PgPool, book: &mut Book) -> Result<()> {
    let authors = items_of_book(pool, Entity::Authors, book.id).await?;
    let categories = items_of_book(pool, Entity::Categories, book.id).await?;
    let tags = items_of_book(pool, Entity::Tags, book.id).await?;

    book.authors = authors;
    book.categories = categories;
    book.tags = tags;
    Ok(())
}

async fn items_of_book(pool: &PgPool, kind: Entity, book_id: i32) -> Result<Vec<Item>> {
    let mut qb = query::select_all(kind, &[Filter::BookId(book_id)], Window::relations())?;
    let found = qb.build().fetch_all(pool).await?;
    Ok(rows::map_rows(kind, &found)?.into_items())
}

/// Fetch one page of the books associated with `item`.
pub async fn attach_books(pool: &PgPool, entity: Entity, item: &mut Item, window: Window) -> Result<()> {
    item.books = books_of_item(pool, entity, item.id, window).await?;
    Ok(())
}

/// Books linked to item `id` through any join row carrying its name.
///
/// Keyed on the id rather than the display name: title casing does not
/// always survive `lower()` (`ı`, `ß`), so the stored name is used.
pub async fn books_of_item(
    pool: &PgPool,
    entity: Entity,
    id: i32,
    window: Window,
) -> Result<Vec<Book>> {
    let mut qb = query::select_book_ids_of_item(entity, id)?;
    let ids = qb.build_query_scalar::<i32>().fetch_all(pool).await?;
    books_by_ids(pool, &ids, window).await
}

/// Books whose `entity` join rows carry `name`, paginated by `window`.
pub async fn books_named(
    pool: &PgPool,
    entity: Entity,
    name: &str,
    window: Window,
) -> Result<Vec<Book>> {
    let mut qb = query::select_book_ids(entity, name)?;
    let ids = qb.build_query_scalar::<i32>().fetch_all(pool).await?;
    books_by_ids(pool, &ids, window).await
}

async fn books_by_ids(pool: &PgPool, ids: &[i32], window: Window) -> Result<Vec<Book>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb = query::select_by_ids(Entity::Books, ids, window)?;
    let found = qb.build().fetch_all(pool).await?;
    Ok(rows::map_rows(Entity::Books, &found)?.into_books())
}

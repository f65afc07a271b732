//! Catalog DAO
//!
//! Entity-agnostic façade over the query builder, row mapper and
//! relation assembler. Absent rows come back as `Ok(None)` or an empty
//! list so callers can tell "not found" from a failed query.

use sqlx::PgPool;

use super::query::require_item;
use super::{query, relations, rows, Filter};
use crate::error::Result;
use crate::models::{Book, Entity, Item, Listing, Window};

/// Data access object owning the connection pool.
///
/// Cloning is cheap (the pool is reference counted); every clone shares
/// the same connections.
#[derive(Debug, Clone)]
pub struct Dao {
    pool: PgPool,
}

impl Dao {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All rows of `entity` matching every filter, in listing order.
    pub async fn get(&self, entity: Entity, filters: &[Filter], window: Window) -> Result<Listing> {
        tracing::debug!(%entity, ?filters, limit = window.limit(), offset = window.offset(), "get");

        let mut qb = query::select_listing(entity, filters, window)?;
        let found = qb.build().fetch_all(&self.pool).await?;
        rows::map_rows(entity, &found)
    }

    /// One page of books ordered by id.
    pub async fn list_books(&self, window: Window) -> Result<Vec<Book>> {
        Ok(self.get(Entity::Books, &[], window).await?.into_books())
    }

    /// One page of an item table, one record per item id.
    pub async fn get_distinct_items(&self, entity: Entity, window: Window) -> Result<Vec<Item>> {
        tracing::debug!(%entity, limit = window.limit(), offset = window.offset(), "get_distinct_items");

        let mut qb = query::select_distinct(entity, window)?;
        let found = qb.build().fetch_all(&self.pool).await?;
        Ok(rows::map_rows(entity, &found)?.into_items())
    }

    /// A book with its authors, categories and tags attached.
    pub async fn get_book_by_id(&self, id: i32) -> Result<Option<Book>> {
        tracing::debug!(id, "get_book_by_id");

        let Some(mut book) = self
            .get(Entity::Books, &[Filter::Id(id)], Window::single())
            .await?
            .into_books()
            .into_iter()
            .next()
        else {
            return Ok(None);
        };

        relations::attach_items(&self.pool, &mut book).await?;
        Ok(Some(book))
    }

    /// An item's core row, without its books.
    pub async fn find_item(&self, entity: Entity, id: i32) -> Result<Option<Item>> {
        require_item(entity)?;

        let mut qb = query::select_all(entity, &[Filter::Id(id)], Window::single())?;
        let found = qb.build().fetch_all(&self.pool).await?;
        Ok(rows::map_rows(entity, &found)?.into_items().into_iter().next())
    }

    /// An item with one page of its books attached.
    pub async fn get_item_by_id(&self, entity: Entity, id: i32, window: Window) -> Result<Option<Item>> {
        tracing::debug!(%entity, id, limit = window.limit(), offset = window.offset(), "get_item_by_id");

        let Some(mut item) = self.find_item(entity, id).await? else {
            return Ok(None);
        };

        relations::attach_books(&self.pool, entity, &mut item, window).await?;
        Ok(Some(item))
    }

    /// One page of the books associated with item `id`.
    pub async fn get_item_books(&self, entity: Entity, id: i32, window: Window) -> Result<Vec<Book>> {
        tracing::debug!(%entity, id, limit = window.limit(), offset = window.offset(), "get_item_books");

        relations::books_of_item(&self.pool, entity, id, window).await
    }

    /// Books associated with the `entity` item called `name`.
    pub async fn get_filter_books(&self, entity: Entity, name: &str, window: Window) -> Result<Vec<Book>> {
        tracing::debug!(%entity, item_name = name, limit = window.limit(), offset = window.offset(), "get_filter_books");

        require_item(entity)?;
        relations::books_named(&self.pool, entity, name, window).await
    }

    /// Round-trip `SELECT 1` for health checks.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // Nothing here reaches the database: every call fails validation
    // before a connection is requested.
    fn lazy_dao() -> Dao {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/pustaka")
            .expect("lazy pool");
        Dao::new(pool)
    }

    #[tokio::test]
    async fn distinct_listing_rejects_books() {
        let err = lazy_dao()
            .get_distinct_items(Entity::Books, Window::default())
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn item_lookups_reject_books() {
        let dao = lazy_dao();
        assert!(dao.find_item(Entity::Books, 1).await.unwrap_err().is_client_error());
        assert!(dao
            .get_item_books(Entity::Books, 1, Window::default())
            .await
            .unwrap_err()
            .is_client_error());
        assert!(dao
            .get_filter_books(Entity::Books, "x", Window::default())
            .await
            .unwrap_err()
            .is_client_error());
    }

    #[tokio::test]
    async fn inapplicable_filter_is_rejected() {
        let err = lazy_dao()
            .get(Entity::Books, &[Filter::BookId(1)], Window::default())
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }
}

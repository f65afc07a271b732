//! Parameterized SQL for catalog reads
//!
//! Builders return a `QueryBuilder` so callers choose how to fetch
//! (`build()` for rows, `build_query_scalar()` for id lists). Filter
//! values are always pushed with `push_bind`.

use sqlx::{Postgres, QueryBuilder};

use crate::error::{CatalogError, Result};
use crate::models::{Entity, Window};

/// Typed WHERE predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `id = $n`
    Id(i32),
    /// `book_id = $n` (item tables only)
    BookId(i32),
    /// `lower(name) = lower($n)` (item tables only)
    Name(String),
    /// `id = ANY($n)`
    IdIn(Vec<i32>),
}

impl Filter {
    fn applies_to(&self, entity: Entity) -> bool {
        match self {
            Self::Id(_) | Self::IdIn(_) => true,
            Self::BookId(_) | Self::Name(_) => entity.is_item(),
        }
    }

    fn push_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Id(id) => {
                qb.push("id = ").push_bind(*id);
            }
            Self::BookId(id) => {
                qb.push("book_id = ").push_bind(*id);
            }
            Self::Name(name) => {
                qb.push("lower(name) = lower(").push_bind(name.clone()).push(")");
            }
            Self::IdIn(ids) => {
                qb.push("id = ANY(").push_bind(ids.clone()).push(")");
            }
        }
    }
}

/// `SELECT <columns> FROM <entity> WHERE <filters> LIMIT $ OFFSET $`, unordered.
pub fn select_all(
    entity: Entity,
    filters: &[Filter],
    window: Window,
) -> Result<QueryBuilder<'static, Postgres>> {
    select(entity, filters, None, window)
}

/// Like [`select_all`] with the top-level listing order
/// (`name, id` for items, `id` for books).
pub fn select_listing(
    entity: Entity,
    filters: &[Filter],
    window: Window,
) -> Result<QueryBuilder<'static, Postgres>> {
    select(entity, filters, Some(entity.listing_order()), window)
}

/// One row per distinct item id, ordered by name.
pub fn select_distinct(entity: Entity, window: Window) -> Result<QueryBuilder<'static, Postgres>> {
    require_item(entity)?;

    let columns = entity.columns();
    let mut qb = QueryBuilder::new(format!(
        "SELECT {columns} FROM (SELECT DISTINCT ON (id) {columns} FROM {table} ORDER BY id, book_id) AS distinct_items ORDER BY {order}",
        table = entity.table(),
        order = entity.listing_order(),
    ));
    push_window(&mut qb, window);
    Ok(qb)
}

/// Rows whose id is in `ids`, ordered by id.
pub fn select_by_ids(
    entity: Entity,
    ids: &[i32],
    window: Window,
) -> Result<QueryBuilder<'static, Postgres>> {
    select_listing(entity, &[Filter::IdIn(ids.to_vec())], window)
}

/// `book_id` of every join row whose name matches, ignoring case.
pub fn select_book_ids(entity: Entity, name: &str) -> Result<QueryBuilder<'static, Postgres>> {
    require_item(entity)?;

    let mut qb = QueryBuilder::new(format!("SELECT book_id FROM {} WHERE ", entity.table()));
    Filter::Name(name.to_owned()).push_to(&mut qb);
    Ok(qb)
}

/// `book_id` of every join row sharing a name with item `id`.
///
/// The name is compared as stored, so display casing never affects
/// which books match.
pub fn select_book_ids_of_item(entity: Entity, id: i32) -> Result<QueryBuilder<'static, Postgres>> {
    require_item(entity)?;

    let table = entity.table();
    let mut qb = QueryBuilder::new(format!(
        "SELECT book_id FROM {table} WHERE lower(name) IN (SELECT lower(name) FROM {table} WHERE id = "
    ));
    qb.push_bind(id).push(")");
    Ok(qb)
}

fn select(
    entity: Entity,
    filters: &[Filter],
    order_by: Option<&'static str>,
    window: Window,
) -> Result<QueryBuilder<'static, Postgres>> {
    if let Some(filter) = filters.iter().find(|f| !f.applies_to(entity)) {
        return Err(CatalogError::invalid_parameter(
            "filter",
            format!("{filter:?} does not apply to {entity}"),
        ));
    }

    let mut qb = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE ",
        entity.columns(),
        entity.table()
    ));

    if filters.is_empty() {
        qb.push("TRUE");
    }
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            qb.push(" AND ");
        }
        filter.push_to(&mut qb);
    }

    if let Some(order) = order_by {
        qb.push(" ORDER BY ").push(order);
    }

    push_window(&mut qb, window);
    Ok(qb)
}

fn push_window(qb: &mut QueryBuilder<'static, Postgres>, window: Window) {
    qb.push(" LIMIT ")
        .push_bind(window.limit())
        .push(" OFFSET ")
        .push_bind(window.offset());
}

pub(crate) fn require_item(entity: Entity) -> Result<()> {
    if entity.is_item() {
        Ok(())
    } else {
        Err(CatalogError::invalid_parameter(
            "entity",
            format!("{entity} is not an item table"),
        ))
    }
}

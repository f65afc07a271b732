//! Positional row mapping
//!
//! Column order follows [`Entity::columns`]:
//! books = (id, title, image_url, gramed_url, description),
//! items = (id, book_id, name).

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use crate::error::{CatalogError, Result};
use crate::models::{Book, Entity, Item, Listing};
use crate::text::title_case;

/// Map rows of `entity` into a listing of the matching kind.
pub fn map_rows(entity: Entity, rows: &[PgRow]) -> Result<Listing> {
    if entity.is_item() {
        rows.iter()
            .map(|row| map_item(entity, row))
            .collect::<Result<Vec<_>>>()
            .map(Listing::Items)
    } else {
        rows.iter()
            .map(map_book)
            .collect::<Result<Vec<_>>>()
            .map(Listing::Books)
    }
}

/// Map a `books` row.
pub fn map_book(row: &PgRow) -> Result<Book> {
    let entity = Entity::Books;
    check_width(entity, row.len())?;

    Ok(Book {
        id: column(row, 0, entity)?,
        title: column(row, 1, entity)?,
        image_url: column(row, 2, entity)?,
        gramed_url: column(row, 3, entity)?,
        description: column(row, 4, entity)?,
        ..Default::default()
    })
}

/// Map an author/category/tag row, title-casing its name.
pub fn map_item(entity: Entity, row: &PgRow) -> Result<Item> {
    check_width(entity, row.len())?;

    let name: String = column(row, 2, entity)?;
    Ok(Item {
        id: column(row, 0, entity)?,
        book_id: column(row, 1, entity)?,
        name: title_case(&name),
        books: Vec::new(),
    })
}

fn check_width(entity: Entity, len: usize) -> Result<()> {
    let expected = entity.column_count();
    if len != expected {
        return Err(CatalogError::malformed_row(
            entity,
            format!("expected {expected} columns, got {len}"),
        ));
    }
    Ok(())
}

fn column<'r, T>(row: &'r PgRow, index: usize, entity: Entity) -> Result<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(index).map_err(|e| classify(entity, e))
}

/// Shape mismatches are `MalformedRow`; anything else stays `QueryFailed`.
fn classify(entity: Entity, err: sqlx::Error) -> CatalogError {
    match err {
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => CatalogError::malformed_row(entity, err.to_string()),
        other => CatalogError::QueryFailed(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_mismatch_is_malformed() {
        let err = check_width(Entity::Books, 3).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRow { entity: Entity::Books, .. }
        ));
        assert!(err.to_string().contains("expected 5 columns, got 3"));

        assert!(check_width(Entity::Tags, 3).is_ok());
    }

    #[test]
    fn shape_errors_are_malformed() {
        let err = classify(
            Entity::Authors,
            sqlx::Error::ColumnIndexOutOfBounds { index: 3, len: 3 },
        );
        assert!(matches!(err, CatalogError::MalformedRow { .. }));

        let err = classify(Entity::Authors, sqlx::Error::ColumnNotFound("name".into()));
        assert!(matches!(err, CatalogError::MalformedRow { .. }));
    }

    #[test]
    fn other_errors_stay_query_failures() {
        let err = classify(Entity::Books, sqlx::Error::PoolClosed);
        assert!(matches!(err, CatalogError::QueryFailed(sqlx::Error::PoolClosed)));
    }

    #[test]
    fn empty_rows_give_empty_listing() {
        assert_eq!(map_rows(Entity::Books, &[]).unwrap(), Listing::Books(vec![]));
        assert_eq!(map_rows(Entity::Tags, &[]).unwrap(), Listing::Items(vec![]));
    }
}

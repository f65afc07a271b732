//! DAO integration tests against a real PostgreSQL.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p pustaka-core -- --ignored

use std::collections::HashSet;

use pustaka_core::{Dao, Entity, Filter, Listing, Window};
use sqlx::PgPool;

fn page(page: i64, per_page: i64) -> Window {
    Window::from_page(page, per_page).unwrap()
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn book_by_id_attaches_title_cased_items(pool: PgPool) {
    let dao = Dao::new(pool);

    let book = dao.get_book_by_id(1).await.unwrap().expect("book 1 exists");
    assert_eq!(book.title, "Laskar Pelangi");
    assert_eq!(book.authors.len(), 1);
    assert_eq!(book.authors[0].name, "Andrea Hirata");
    assert_eq!(book.authors[0].book_id, 1);
    assert_eq!(book.categories[0].name, "Novel");
    let tags: HashSet<&str> = book.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tags, HashSet::from(["Smp", "Irmak"]));
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn book_without_items_has_empty_relations(pool: PgPool) {
    let book = Dao::new(pool).get_book_by_id(3).await.unwrap().unwrap();
    assert!(book.authors.is_empty());
    assert!(book.categories.is_empty());
    assert!(book.tags.is_empty());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn missing_book_is_none(pool: PgPool) {
    assert!(Dao::new(pool).get_book_by_id(999).await.unwrap().is_none());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn distinct_items_have_unique_ids(pool: PgPool) {
    let dao = Dao::new(pool);

    let categories = dao
        .get_distinct_items(Entity::Categories, page(1, 20))
        .await
        .unwrap();
    let ids: HashSet<i32> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), categories.len());
    assert_eq!(categories.len(), 2);
    // ordered by name
    assert_eq!(categories[0].name, "Fiksi Ilmiah");
    assert_eq!(categories[1].name, "Novel");
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn distinct_items_paginate(pool: PgPool) {
    let dao = Dao::new(pool);
    let second = dao.get_distinct_items(Entity::Authors, page(2, 1)).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Tere Liye");
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn item_by_id_attaches_paginated_books(pool: PgPool) {
    let dao = Dao::new(pool);

    let author = dao
        .get_item_by_id(Entity::Authors, 1, page(1, 20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(author.name, "Andrea Hirata");
    let titles: Vec<_> = author.books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Laskar Pelangi", "Sang Pemimpi"]);

    let second_page = dao
        .get_item_by_id(Entity::Authors, 1, page(2, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second_page.books.len(), 1);
    assert_eq!(second_page.books[0].id, 2);
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn item_books_follow_stored_name(pool: PgPool) {
    let dao = Dao::new(pool);

    // "ırmak" displays as "Irmak", whose lowercase no longer matches the row
    let tag = dao
        .get_item_by_id(Entity::Tags, 3, page(1, 20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tag.name, "Irmak");
    let ids: Vec<i32> = tag.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, [1, 4]);

    let books = dao.get_item_books(Entity::Tags, 3, page(1, 20)).await.unwrap();
    assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), [1, 4]);

    assert!(dao
        .get_item_books(Entity::Tags, 42, page(1, 20))
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn missing_item_is_none(pool: PgPool) {
    let dao = Dao::new(pool);
    assert!(dao
        .get_item_by_id(Entity::Tags, 42, Window::default())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn filter_books_matches_name_case_insensitively(pool: PgPool) {
    let dao = Dao::new(pool);

    let books = dao
        .get_filter_books(Entity::Categories, "Novel", page(1, 20))
        .await
        .unwrap();
    let ids: Vec<i32> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids, [1, 2, 4]);
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn filter_books_unknown_name_is_empty(pool: PgPool) {
    let books = Dao::new(pool)
        .get_filter_books(Entity::Authors, "unknown-name", page(1, 20))
        .await
        .unwrap();
    assert!(books.is_empty());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn get_returns_typed_listing(pool: PgPool) {
    let dao = Dao::new(pool);

    let books = dao.get(Entity::Books, &[], page(1, 2)).await.unwrap();
    match books {
        Listing::Books(books) => {
            assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), [1, 2]);
        }
        other => panic!("expected books, got {other:?}"),
    }

    let rows = dao
        .get(Entity::Authors, &[Filter::BookId(4)], page(1, 20))
        .await
        .unwrap()
        .into_items();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Tere Liye");

    let none = dao
        .get(Entity::Tags, &[Filter::Name("nothing".into())], page(1, 20))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrator = "pustaka_core::MIGRATOR", fixtures("catalog"))]
#[ignore = "requires database"]
async fn ping_succeeds(pool: PgPool) {
    Dao::new(pool).ping().await.unwrap();
}

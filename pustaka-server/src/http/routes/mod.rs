//! Route handlers organized by resource

pub mod books;
pub mod graphql;
pub mod health;
pub mod items;
pub mod pages;

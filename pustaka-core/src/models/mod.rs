//! Domain models
//!
//! All caller input is validated when these types are created:
//! entity names through [`Entity`]'s parser, pagination through
//! [`paginate`]. Invalid input returns `CatalogError::InvalidParameter`.

pub mod entity;
pub mod listing;
pub mod pagination;
pub mod record;

pub use entity::Entity;
pub use listing::Listing;
pub use pagination::{paginate, Envelope, PageMeta, PaginationParams, Window};
pub use record::{Book, Item};

//! Pagination types

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::error::{CatalogError, Result};

/// Default page number
const DEFAULT_PAGE: i64 = 1;

/// Default items per page
const DEFAULT_PER_PAGE: i64 = 20;

/// Limit used when fetching every item of a single book.
const RELATION_LIMIT: i64 = 1000;

/// SQL LIMIT/OFFSET pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    limit: i64,
    offset: i64,
}

impl Window {
    /// Create a window from a 1-indexed page number.
    ///
    /// - `page` must be at least 1
    /// - `per_page` must be at least 1
    pub fn from_page(page: i64, per_page: i64) -> Result<Self> {
        if page < 1 {
            return Err(CatalogError::invalid_parameter("page", "must be at least 1"));
        }
        if per_page < 1 {
            return Err(CatalogError::invalid_parameter(
                "per_page",
                "must be at least 1",
            ));
        }

        let offset = (page - 1)
            .checked_mul(per_page)
            .ok_or_else(|| CatalogError::invalid_parameter("page", "out of range"))?;

        Ok(Self {
            limit: per_page,
            offset,
        })
    }

    /// Window large enough for every item attached to one book.
    pub const fn relations() -> Self {
        Self {
            limit: RELATION_LIMIT,
            offset: 0,
        }
    }

    /// Single-row window for core row lookups.
    pub const fn single() -> Self {
        Self {
            limit: 1,
            offset: 0,
        }
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Get OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Metadata envelope for this window.
    pub fn meta(&self, entity: impl Into<String>) -> PageMeta {
        PageMeta::new(entity, self.limit, self.offset)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PER_PAGE,
            offset: 0,
        }
    }
}

/// Convert raw `page` / `per_page` query values into a [`Window`].
///
/// Missing values default to page 1, 20 per page.
pub fn paginate(page: Option<&str>, per_page: Option<&str>) -> Result<Window> {
    let page = match page {
        Some(raw) => parse_number("page", raw)?,
        None => DEFAULT_PAGE,
    };
    let per_page = match per_page {
        Some(raw) => parse_number("per_page", raw)?,
        None => DEFAULT_PER_PAGE,
    };
    Window::from_page(page, per_page)
}

fn parse_number(name: &'static str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| CatalogError::invalid_parameter(name, "must be a valid number"))
}

/// Pagination metadata sent alongside a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Logical page identifier, e.g. `all` or `author/3`
    pub entity: String,
    pub page: i64,
    pub per_page: i64,
    /// Always `page + 1`; whether that page has rows is not checked.
    pub next: i64,
    /// `page - 1`, or 0 on the first page
    pub prev: i64,
}

impl PageMeta {
    pub fn new(entity: impl Into<String>, limit: i64, offset: i64) -> Self {
        let page = if limit > 0 { offset / limit + 1 } else { 1 };
        Self {
            entity: entity.into(),
            page,
            per_page: limit,
            next: page + 1,
            prev: if page > 1 { page - 1 } else { 0 },
        }
    }
}

/// Page of data wrapped with its metadata
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub metadata: PageMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(metadata: PageMeta, data: T) -> Self {
        Self { metadata, data }
    }
}

/// Query parameters for pagination.
///
/// Kept as strings so a non-numeric value surfaces as
/// `InvalidParameter` instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number (default 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
    /// Records per page (default 20)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub per_page: Option<String>,
}

impl PaginationParams {
    pub fn window(&self) -> Result<Window> {
        paginate(self.page.as_deref(), self.per_page.as_deref())
    }
}

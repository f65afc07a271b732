//! Application state shared across handlers

use std::sync::Arc;

use pustaka_core::Dao;

use crate::graphql::{build_schema, CatalogSchema};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    dao: Dao,
    schema: CatalogSchema,
}

impl AppState {
    pub fn new(dao: Dao) -> Self {
        let schema = build_schema(dao.clone());
        Self {
            inner: Arc::new(AppStateInner { dao, schema }),
        }
    }

    pub fn dao(&self) -> &Dao {
        &self.inner.dao
    }

    pub fn schema(&self) -> &CatalogSchema {
        &self.inner.schema
    }
}

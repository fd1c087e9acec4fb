//! List categories use case

use crate::error::CatalogError;
use crate::ports::catalog_store::CatalogStore;
use std::sync::Arc;
use tracing::{debug, warn};
use trivia_domain::CategoryMap;

/// Use case for reading the `id -> name` category map
pub struct ListCategoriesUseCase {
    store: Arc<dyn CatalogStore>,
}

impl ListCategoriesUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<CategoryMap, CatalogError> {
        let categories = self.store.category_map().await?;
        if categories.is_empty() {
            warn!("Catalog has no categories");
        } else {
            debug!("Listing {} categories", categories.len());
        }
        Ok(categories)
    }
}

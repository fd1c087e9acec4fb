//! Question filtering and search
//!
//! Narrows the catalog by free text or by category on top of the
//! [`CatalogStore`] port. Every result is ordered by ascending id.

use crate::ports::catalog_store::{CatalogStore, StoreError};
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, CategoryMap, Question};

/// Result of scoping the catalog to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryScope {
    /// The category does not exist
    Unknown,
    /// The category exists; its questions may be empty
    Known(Vec<Question>),
}

/// Filter/search engine over the catalog store
#[derive(Clone)]
pub struct QuestionQuery {
    store: Arc<dyn CatalogStore>,
}

impl QuestionQuery {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Every question
    pub async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let questions = self.store.all().await?;
        Ok(sorted(questions))
    }

    /// Questions containing `term`, ignoring case. A blank term matches nothing.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        if term.trim().is_empty() {
            debug!("Blank search term, skipping store lookup");
            return Ok(Vec::new());
        }
        let questions = self.store.search_text(term).await?;
        debug!("Search for {:?} matched {} questions", term, questions.len());
        Ok(sorted(questions))
    }

    /// Questions of one category, distinguishing an unknown category
    pub async fn by_category(
        &self,
        category: CategoryId,
        categories: &CategoryMap,
    ) -> Result<CategoryScope, StoreError> {
        if !categories.contains(category) {
            debug!("Category {} is not in the catalog", category);
            return Ok(CategoryScope::Unknown);
        }
        Ok(CategoryScope::Known(self.in_category(category).await?))
    }

    /// Questions filed under `category`, without checking that it exists
    pub async fn in_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        let questions = self.store.filter_by_category(category).await?;
        Ok(sorted(questions))
    }
}

fn sorted(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.id);
    questions
}

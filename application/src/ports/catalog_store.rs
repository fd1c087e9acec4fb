//! Catalog Store port
//!
//! Defines the interface for durable question and category storage.

use async_trait::async_trait;
use trivia_domain::{Category, CategoryId, CategoryMap, NewQuestion, Question, QuestionId};
use thiserror::Error;

/// Errors that can occur during catalog store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Durable storage for questions and categories
///
/// Every call is treated as atomic: an insert either persists the whole
/// record or nothing, and a delete removes exactly one record or none.
/// Sequences come back ordered by ascending id.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a question and return it with its assigned id
    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question, returning whether it existed
    async fn delete(&self, id: QuestionId) -> Result<bool, StoreError>;

    /// All questions
    async fn all(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions filed under one category
    async fn filter_by_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case
    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// All categories
    async fn all_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// `id -> name` view over [`all_categories`](Self::all_categories)
    async fn category_map(&self) -> Result<CategoryMap, StoreError> {
        let categories = self.all_categories().await?;
        Ok(CategoryMap::from_categories(&categories))
    }
}

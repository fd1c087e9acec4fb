//! Create question use case

use crate::error::CatalogError;
use crate::ports::catalog_store::CatalogStore;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{NewQuestion, Question};

/// Use case for persisting a new question
///
/// The category must exist at creation time. Nothing is written when the
/// check fails.
pub struct CreateQuestionUseCase {
    store: Arc<dyn CatalogStore>,
}

impl CreateQuestionUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, question: NewQuestion) -> Result<Question, CatalogError> {
        let categories = self.store.category_map().await?;
        if !categories.contains(question.category()) {
            warn!(
                "Rejecting question with unknown category {}",
                question.category()
            );
            return Err(CatalogError::CategoryNotFound(question.category()));
        }

        let created = self.store.insert(question).await?;
        info!(
            "Created question {} in category {}",
            created.id, created.category
        );
        Ok(created)
    }
}

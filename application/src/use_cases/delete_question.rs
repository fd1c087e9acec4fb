//! Delete question use case
//!
//! Removes exactly one question and returns the refreshed listing for the
//! requested page. Deleting an id that does not exist changes nothing.

use crate::error::CatalogError;
use crate::payload::QuestionListing;
use crate::ports::catalog_store::CatalogStore;
use crate::use_cases::question_query::QuestionQuery;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{Page, QuestionId, paginate};

/// Input for the DeleteQuestion use case
#[derive(Debug, Clone, Copy)]
pub struct DeleteQuestionInput {
    pub id: QuestionId,
    /// Page of the listing returned after deletion
    pub page: Page,
}

impl DeleteQuestionInput {
    pub fn new(id: QuestionId) -> Self {
        Self {
            id,
            page: Page::FIRST,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Outcome of a successful deletion
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionOutcome {
    pub deleted: QuestionId,
    pub listing: QuestionListing,
}

/// Use case for deleting a question
pub struct DeleteQuestionUseCase {
    store: Arc<dyn CatalogStore>,
    query: QuestionQuery,
}

impl DeleteQuestionUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            query: QuestionQuery::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn execute(&self, input: DeleteQuestionInput) -> Result<DeletionOutcome, CatalogError> {
        if !self.store.delete(input.id).await? {
            warn!("Delete of question {} found nothing", input.id);
            return Err(CatalogError::QuestionNotFound(input.id));
        }
        info!("Deleted question {}", input.id);

        let remaining = self.query.list_all().await?;
        Ok(DeletionOutcome {
            deleted: input.id,
            listing: QuestionListing {
                questions: paginate(&remaining, input.page).to_vec(),
                total_questions: remaining.len(),
                current_category: None,
                categories: self.store.category_map().await?,
            },
        })
    }
}

//! Search questions use case

use crate::error::CatalogError;
use crate::payload::QuestionListing;
use crate::ports::catalog_store::CatalogStore;
use crate::use_cases::question_query::QuestionQuery;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{Page, paginate};

/// Input for the SearchQuestions use case
#[derive(Debug, Clone)]
pub struct SearchQuestionsInput {
    pub term: String,
    pub page: Page,
}

impl SearchQuestionsInput {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: Page::FIRST,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Use case for case-insensitive substring search over question text
///
/// No matches is a successful, empty listing.
pub struct SearchQuestionsUseCase {
    store: Arc<dyn CatalogStore>,
    query: QuestionQuery,
}

impl SearchQuestionsUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            query: QuestionQuery::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn execute(&self, input: SearchQuestionsInput) -> Result<QuestionListing, CatalogError> {
        let matches = self.query.search(&input.term).await?;
        debug!(
            "Search {:?}: {} matches, serving page {}",
            input.term,
            matches.len(),
            input.page
        );

        Ok(QuestionListing {
            questions: paginate(&matches, input.page).to_vec(),
            total_questions: matches.len(),
            current_category: None,
            categories: self.store.category_map().await?,
        })
    }
}

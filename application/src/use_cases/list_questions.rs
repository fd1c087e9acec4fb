//! List questions use case
//!
//! Pages through the whole catalog. A page past the end is reported as
//! [`CatalogError::EmptyPage`].

use crate::error::CatalogError;
use crate::payload::QuestionListing;
use crate::ports::catalog_store::CatalogStore;
use crate::use_cases::question_query::QuestionQuery;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{Page, paginate};

/// Use case for the paginated question listing
pub struct ListQuestionsUseCase {
    store: Arc<dyn CatalogStore>,
    query: QuestionQuery,
}

impl ListQuestionsUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            query: QuestionQuery::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn execute(&self, page: Page) -> Result<QuestionListing, CatalogError> {
        let all = self.query.list_all().await?;
        let questions = paginate(&all, page).to_vec();
        if questions.is_empty() {
            debug!("Page {} is empty ({} questions total)", page, all.len());
            return Err(CatalogError::EmptyPage(page));
        }

        Ok(QuestionListing {
            questions,
            total_questions: all.len(),
            current_category: None,
            categories: self.store.category_map().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCatalogStore;

    fn page(n: usize) -> Page {
        Page::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_first_page() {
        let use_case = ListQuestionsUseCase::new(Arc::new(MockCatalogStore::with_science_questions(23)));
        let listing = use_case.execute(Page::FIRST).await.unwrap();
        assert_eq!(listing.questions.len(), 10);
        assert_eq!(listing.total_questions, 23);
        assert_eq!(listing.current_category, None);
        assert_eq!(listing.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let use_case = ListQuestionsUseCase::new(Arc::new(MockCatalogStore::with_science_questions(23)));
        let listing = use_case.execute(page(3)).await.unwrap();
        let ids: Vec<u64> = listing.questions.iter().map(|q| q.id.value()).collect();
        assert_eq!(ids, vec![21, 22, 23]);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty_page() {
        let use_case = ListQuestionsUseCase::new(Arc::new(MockCatalogStore::with_science_questions(23)));
        let result = use_case.execute(page(4)).await;
        assert!(matches!(result, Err(CatalogError::EmptyPage(p)) if p.number() == 4));
    }

    #[tokio::test]
    async fn test_empty_catalog_first_page_is_empty_page() {
        let use_case = ListQuestionsUseCase::new(Arc::new(MockCatalogStore::with_science_questions(0)));
        assert!(use_case.execute(Page::FIRST).await.unwrap_err().is_not_found());
    }
}

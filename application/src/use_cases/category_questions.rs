//! Questions by category use case

use crate::error::CatalogError;
use crate::payload::QuestionListing;
use crate::ports::catalog_store::CatalogStore;
use crate::use_cases::question_query::{CategoryScope, QuestionQuery};
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, Page, paginate};

/// Input for the CategoryQuestions use case
#[derive(Debug, Clone, Copy)]
pub struct CategoryQuestionsInput {
    pub category: CategoryId,
    pub page: Page,
}

impl CategoryQuestionsInput {
    pub fn new(category: CategoryId) -> Self {
        Self {
            category,
            page: Page::FIRST,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Use case for category-scoped retrieval
///
/// An unknown category yields [`CatalogError::CategoryNotFound`]; a known
/// category whose requested page holds nothing yields
/// [`CatalogError::EmptyPage`].
pub struct CategoryQuestionsUseCase {
    store: Arc<dyn CatalogStore>,
    query: QuestionQuery,
}

impl CategoryQuestionsUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            query: QuestionQuery::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn execute(&self, input: CategoryQuestionsInput) -> Result<QuestionListing, CatalogError> {
        let categories = self.store.category_map().await?;
        let matches = match self.query.by_category(input.category, &categories).await? {
            CategoryScope::Known(questions) => questions,
            CategoryScope::Unknown => return Err(CatalogError::CategoryNotFound(input.category)),
        };

        let questions = paginate(&matches, input.page).to_vec();
        if questions.is_empty() {
            debug!(
                "Category {} has no questions on page {}",
                input.category, input.page
            );
            return Err(CatalogError::EmptyPage(input.page));
        }

        Ok(QuestionListing {
            questions,
            total_questions: matches.len(),
            current_category: Some(input.category),
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockCatalogStore, question};
    use trivia_domain::Category;

    fn store() -> Arc<MockCatalogStore> {
        Arc::new(MockCatalogStore::new(
            vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
                Category::new(3, "Geography"),
            ],
            vec![question(1, 1), question(2, 2), question(3, 1), question(4, 1)],
        ))
    }

    #[tokio::test]
    async fn test_scoped_listing() {
        let listing = CategoryQuestionsUseCase::new(store())
            .execute(CategoryQuestionsInput::new(CategoryId::new(1)))
            .await
            .unwrap();
        let ids: Vec<u64> = listing.questions.iter().map(|q| q.id.value()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(listing.total_questions, 3);
        assert_eq!(listing.current_category, Some(CategoryId::new(1)));
        assert_eq!(listing.categories.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let result = CategoryQuestionsUseCase::new(store())
            .execute(CategoryQuestionsInput::new(CategoryId::new(999)))
            .await;
        assert!(matches!(result, Err(CatalogError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn test_known_category_without_questions() {
        let result = CategoryQuestionsUseCase::new(store())
            .execute(CategoryQuestionsInput::new(CategoryId::new(3)))
            .await;
        assert!(matches!(result, Err(CatalogError::EmptyPage(_))));
    }

    #[tokio::test]
    async fn test_page_past_end() {
        let result = CategoryQuestionsUseCase::new(store())
            .execute(CategoryQuestionsInput::new(CategoryId::new(1)).with_page(Page::new(2).unwrap()))
            .await;
        assert!(result.unwrap_err().is_not_found());
    }
}

//! In-memory catalog store
//!
//! Keeps categories and questions in ordered maps behind a tokio `RwLock`.
//! Each trait call takes the lock once, so inserts and deletes are atomic
//! with respect to concurrent readers.

use super::seed::{CatalogSeed, SeedError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;
use tracing::{debug, info};
use trivia_application::{CatalogStore, StoreError};
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, by_category, search,
};

#[derive(Debug, Default)]
struct CatalogState {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    /// Last assigned question id; ids are never reused
    last_id: u64,
}

impl CatalogState {
    fn insert(&mut self, new: NewQuestion) -> Question {
        self.last_id += 1;
        let question = Question::from_new(QuestionId::new(self.last_id), new);
        self.questions.insert(question.id, question.clone());
        question
    }
}

/// Process-local [`CatalogStore`] adapter
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with categories but no questions
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let state = CatalogState {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..CatalogState::default()
        };
        Self {
            state: RwLock::new(state),
        }
    }

    /// Load a seed, all or nothing. Returns the number of questions added.
    pub async fn apply_seed(&self, seed: &CatalogSeed) -> Result<usize, SeedError> {
        let mut state = self.state.write().await;
        let known: HashSet<CategoryId> = state.categories.keys().copied().collect();
        let questions = seed.validated_questions(&known)?;

        for category in &seed.categories {
            state.categories.insert(category.id, category.clone());
        }
        let added = questions.len();
        for question in questions {
            state.insert(question);
        }

        info!(
            "Seeded {} categories and {} questions",
            seed.categories.len(),
            added
        );
        Ok(added)
    }

    /// Number of stored questions
    pub async fn question_count(&self) -> usize {
        self.state.read().await.questions.len()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut state = self.state.write().await;
        if !state.categories.contains_key(&question.category()) {
            return Err(StoreError::ConstraintViolation(format!(
                "category {} does not exist",
                question.category()
            )));
        }
        let created = state.insert(question);
        debug!("Stored question {}", created.id);
        Ok(created)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, StoreError> {
        let removed = self.state.write().await.questions.remove(&id).is_some();
        debug!("Delete question {}: removed={}", id, removed);
        Ok(removed)
    }

    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.read().await.questions.values().cloned().collect())
    }

    async fn filter_by_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError> {
        Ok(by_category(self.state.read().await.questions.values(), id))
    }

    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(search(self.state.read().await.questions.values(), term))
    }

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryCatalogStore {
        InMemoryCatalogStore::with_categories([
            Category::new(1, "Science"),
            Category::new(2, "Art"),
        ])
    }

    fn new_question(text: &str, category: u32) -> NewQuestion {
        NewQuestion::new(text, "answer", CategoryId::new(category), 3).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = store();
        let a = store.insert(new_question("First", 1)).await.unwrap();
        let b = store.insert(new_question("Second", 2)).await.unwrap();
        assert_eq!(a.id, QuestionId::new(1));
        assert_eq!(b.id, QuestionId::new(2));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = store();
        let a = store.insert(new_question("First", 1)).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert(new_question("Second", 1)).await.unwrap();
        assert_eq!(b.id, QuestionId::new(2));
    }

    #[tokio::test]
    async fn test_insert_with_unknown_category_persists_nothing() {
        let store = store();
        let result = store.insert(new_question("Orphan", 9)).await;
        assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
        assert_eq!(store.question_count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_false_and_harmless() {
        let store = store();
        store.insert(new_question("Keep me", 1)).await.unwrap();
        assert!(!store.delete(QuestionId::new(77)).await.unwrap());
        assert_eq!(store.question_count().await, 1);
    }

    #[tokio::test]
    async fn test_filters_are_ordered() {
        let store = store();
        store.insert(new_question("Largest planet?", 1)).await.unwrap();
        store.insert(new_question("Painter of Guernica?", 2)).await.unwrap();
        store.insert(new_question("Smallest PLANET?", 1)).await.unwrap();

        let science: Vec<u64> = store
            .filter_by_category(CategoryId::new(1))
            .await
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect();
        assert_eq!(science, vec![1, 3]);

        let planets: Vec<u64> = store
            .search_text("planet")
            .await
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect();
        assert_eq!(planets, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_apply_builtin_seed() {
        let store = InMemoryCatalogStore::new();
        let seed = CatalogSeed::builtin().unwrap();
        let added = store.apply_seed(&seed).await.unwrap();
        assert_eq!(added, seed.questions.len());
        assert_eq!(store.all_categories().await.unwrap().len(), 6);
        assert_eq!(store.all().await.unwrap().len(), added);
    }

    #[tokio::test]
    async fn test_failed_seed_changes_nothing() {
        let store = store();
        let seed = CatalogSeed::parse(
            r#"
[[categories]]
id = 3
type = "Geography"

[[questions]]
question = "Valid?"
answer = "Yes"
category = 3
difficulty = 1

[[questions]]
question = "Orphan?"
answer = "Yes"
category = 99
difficulty = 1
"#,
        )
        .unwrap();
        assert!(store.apply_seed(&seed).await.is_err());
        assert_eq!(store.question_count().await, 0);
        assert_eq!(store.all_categories().await.unwrap().len(), 2);
    }
}

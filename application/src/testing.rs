//! Test doubles shared by the use case tests

use crate::ports::catalog_store::{CatalogStore, StoreError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, by_category, search,
};

/// In-memory store that records calls and can be told to fail
pub(crate) struct MockCatalogStore {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
    failing: AtomicBool,
    pub(crate) search_calls: Mutex<Vec<String>>,
}

impl MockCatalogStore {
    pub(crate) fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            categories,
            questions: Mutex::new(questions),
            failing: AtomicBool::new(false),
            search_calls: Mutex::new(Vec::new()),
        }
    }

    /// Science (1) and Art (2), with `count` Science questions numbered from 1
    pub(crate) fn with_science_questions(count: u64) -> Self {
        let questions = (1..=count).map(|id| question(id, 1)).collect();
        Self::new(
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
            questions,
        )
    }

    pub(crate) fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn question(id: u64, category: u32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question number {id}"),
        answer: format!("Answer {id}"),
        category: CategoryId::new(category),
        difficulty: 1,
    }
}

#[async_trait]
impl CatalogStore for MockCatalogStore {
    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let next = questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1;
        let question = Question::from_new(QuestionId::new(next), new);
        questions.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }

    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn filter_by_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        Ok(by_category(self.questions.lock().unwrap().iter(), id))
    }

    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.check()?;
        self.search_calls.lock().unwrap().push(term.to_string());
        Ok(search(self.questions.lock().unwrap().iter(), term))
    }

    async fn all_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        Ok(self.categories.clone())
    }
}

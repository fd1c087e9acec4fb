//! Play quiz use case
//!
//! Draws the next question of a client-held quiz session. The use case
//! keeps no state between rounds.

use crate::error::CatalogError;
use crate::ports::catalog_store::CatalogStore;
use crate::use_cases::question_query::QuestionQuery;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategorySelector, IndexPicker, QuizDraw, QuizRequest, next_question};

/// Use case for drawing a random unseen quiz question
pub struct PlayQuizUseCase {
    query: QuestionQuery,
    picker: Arc<dyn IndexPicker>,
}

impl PlayQuizUseCase {
    pub fn new(store: Arc<dyn CatalogStore>, picker: Arc<dyn IndexPicker>) -> Self {
        Self {
            query: QuestionQuery::new(store),
            picker,
        }
    }

    pub async fn execute(&self, request: QuizRequest) -> Result<QuizDraw, CatalogError> {
        let pool = match request.selector {
            CategorySelector::Any => self.query.list_all().await?,
            CategorySelector::Specific(id) => self.query.in_category(id).await?,
        };

        let draw = next_question(&pool, &request, self.picker.as_ref());
        match &draw {
            QuizDraw::Next(q) => debug!(
                "Quiz drew question {} ({} already seen)",
                q.id,
                request.previous.len()
            ),
            QuizDraw::Exhausted => debug!("Quiz exhausted for {:?}", request.selector),
        }
        Ok(draw)
    }
}

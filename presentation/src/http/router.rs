//! HTTP router and shared handler state

use super::error;
use super::handlers;
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use trivia_application::{
    CatalogStore, CategoryQuestionsUseCase, CreateQuestionUseCase, DeleteQuestionUseCase,
    ListCategoriesUseCase, ListQuestionsUseCase, PlayQuizUseCase, SearchQuestionsUseCase,
};
use trivia_domain::IndexPicker;

/// Every use case the HTTP surface dispatches to, wired to one store
pub struct TriviaService {
    pub list_categories: ListCategoriesUseCase,
    pub list_questions: ListQuestionsUseCase,
    pub search_questions: SearchQuestionsUseCase,
    pub create_question: CreateQuestionUseCase,
    pub delete_question: DeleteQuestionUseCase,
    pub category_questions: CategoryQuestionsUseCase,
    pub play_quiz: PlayQuizUseCase,
}

impl TriviaService {
    pub fn new(store: Arc<dyn CatalogStore>, picker: Arc<dyn IndexPicker>) -> Self {
        Self {
            list_categories: ListCategoriesUseCase::new(Arc::clone(&store)),
            list_questions: ListQuestionsUseCase::new(Arc::clone(&store)),
            search_questions: SearchQuestionsUseCase::new(Arc::clone(&store)),
            create_question: CreateQuestionUseCase::new(Arc::clone(&store)),
            delete_question: DeleteQuestionUseCase::new(Arc::clone(&store)),
            category_questions: CategoryQuestionsUseCase::new(Arc::clone(&store)),
            play_quiz: PlayQuizUseCase::new(store, picker),
        }
    }
}

/// Build the HTTP API router with the given service.
pub fn build_router(service: Arc<TriviaService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::submit_question),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route(
            "/categories/{id}/questions",
            get(handlers::category_questions),
        )
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(service)
}

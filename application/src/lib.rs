//! Application layer for trivia-api
//!
//! This crate contains use cases, port definitions, and response payloads.
//! It depends only on the domain layer.

pub mod error;
pub mod payload;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use error::CatalogError;
pub use payload::{
    CategoriesPayload, CreatedPayload, DeletedPayload, QuestionListing, QuestionsPayload,
    QuizPayload,
};
pub use ports::catalog_store::{CatalogStore, StoreError};
pub use use_cases::category_questions::{CategoryQuestionsInput, CategoryQuestionsUseCase};
pub use use_cases::create_question::CreateQuestionUseCase;
pub use use_cases::delete_question::{DeleteQuestionInput, DeleteQuestionUseCase, DeletionOutcome};
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_questions::ListQuestionsUseCase;
pub use use_cases::play_quiz::PlayQuizUseCase;
pub use use_cases::question_query::{CategoryScope, QuestionQuery};
pub use use_cases::search_questions::{SearchQuestionsInput, SearchQuestionsUseCase};

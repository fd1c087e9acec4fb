//! Domain layer for trivia-api
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on storage, transport or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Questions and categories form the catalog. Questions are immutable once
//! created; categories are seeded externally and never change here.
//!
//! - **Pagination**: fixed pages of [`QUESTIONS_PER_PAGE`] questions, 1-based
//! - **Matching**: case-insensitive text search and category scoping
//!
//! ## Quiz
//!
//! A quiz session lives entirely on the client. Each round sends the
//! category selector and the ids already seen; the selector draws one
//! unseen question uniformly at random or reports exhaustion.

pub mod catalog;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use catalog::{
    matching::{by_category, matches_term, search},
    pagination::{Page, QUESTIONS_PER_PAGE, paginate},
};
pub use core::{
    category::{Category, CategoryId, CategoryMap},
    error::DomainError,
    question::{NewQuestion, Question, QuestionId},
};
pub use quiz::{
    selector::{CategorySelector, IndexPicker, QuizDraw, QuizRequest, candidates, next_question},
};

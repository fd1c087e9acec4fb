//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod category_questions;
pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
pub mod question_query;
pub mod search_questions;

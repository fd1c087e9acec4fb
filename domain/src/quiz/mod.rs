//! Quiz domain.
//!
//! - [`selector::CategorySelector`] — a specific category or any category
//! - [`selector::QuizRequest`] — one round of a client-held quiz session
//! - [`selector::next_question`] — uniform draw over unseen questions

pub mod selector;

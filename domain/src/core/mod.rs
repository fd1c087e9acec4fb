//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a persisted trivia question
//! - [`question::NewQuestion`] — a validated question awaiting insertion
//! - [`category::Category`] — a question category and the id→name map
//! - [`error::DomainError`] — domain-level errors

pub mod category;
pub mod error;
pub mod question;

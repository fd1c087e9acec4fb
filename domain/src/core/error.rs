//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question text cannot be empty")]
    EmptyQuestion,

    #[error("Answer text cannot be empty")]
    EmptyAnswer,

    #[error("Difficulty must be between {min} and {max}, got {value}")]
    DifficultyOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

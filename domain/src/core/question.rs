//! Question entity

use super::category::CategoryId;
use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a persisted question, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A trivia question (Entity)
///
/// Immutable once persisted; the only lifecycle transition is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl Question {
    /// Attach an identifier to a validated question
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }

    /// Get the question text
    pub fn text(&self) -> &str {
        &self.question
    }
}

/// A validated question that has not been persisted yet
///
/// Whether `category` exists is checked against the catalog by the
/// creating use case; this type only guarantees local field validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: u8,
}

impl NewQuestion {
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 5;

    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(DomainError::EmptyAnswer);
        }
        let range = i64::from(Self::MIN_DIFFICULTY)..=i64::from(Self::MAX_DIFFICULTY);
        if !range.contains(&difficulty) {
            return Err(DomainError::DifficultyOutOfRange {
                value: difficulty,
                min: Self::MIN_DIFFICULTY,
                max: Self::MAX_DIFFICULTY,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            // checked against MAX_DIFFICULTY above
            difficulty: difficulty as u8,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

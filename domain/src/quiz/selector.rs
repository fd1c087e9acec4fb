//! Quiz question selection
//!
//! The selector is stateless: the client carries the session by sending
//! every previously seen id on each round. The candidate set shrinks as
//! that list grows, until the draw reports [`QuizDraw::Exhausted`].
//!
//! Which index gets drawn is delegated to an [`IndexPicker`], so the
//! randomness source can be swapped for a deterministic one in tests.

use crate::core::category::CategoryId;
use crate::core::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelector {
    /// Every category
    Any,
    /// One specific category
    Specific(CategoryId),
}

impl CategorySelector {
    /// Wire value clients send for "all categories"
    pub const ANY_SENTINEL: CategoryId = CategoryId::new(0);

    /// Translate a wire category id, where `0` means any category
    pub fn from_wire(id: CategoryId) -> Self {
        if id == Self::ANY_SENTINEL {
            Self::Any
        } else {
            Self::Specific(id)
        }
    }

    /// Whether a question falls inside this selection
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            Self::Any => true,
            Self::Specific(id) => question.category == *id,
        }
    }
}

/// One round of a quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub selector: CategorySelector,
    /// Ids already shown to the player. Order and duplicates are irrelevant.
    pub previous: HashSet<QuestionId>,
}

impl QuizRequest {
    pub fn new(selector: CategorySelector, previous: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            selector,
            previous: previous.into_iter().collect(),
        }
    }

    /// Whether a question may be offered in this round
    pub fn is_candidate(&self, question: &Question) -> bool {
        self.selector.admits(question) && !self.previous.contains(&question.id)
    }
}

/// Source of the index drawn from the candidate set
///
/// `pick(n)` is only called with `n > 0` and must return a value in `0..n`.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, upper: usize) -> usize;
}

impl<F> IndexPicker for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick(&self, upper: usize) -> usize {
        self(upper)
    }
}

/// Outcome of a quiz draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// An unseen question
    Next(Question),
    /// Every question in the selection has been seen
    Exhausted,
}

impl QuizDraw {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Next(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Questions eligible for this round, in input order
pub fn candidates<'a>(questions: &'a [Question], request: &QuizRequest) -> Vec<&'a Question> {
    questions.iter().filter(|q| request.is_candidate(q)).collect()
}

/// Draw one unseen question, or report exhaustion
pub fn next_question(
    questions: &[Question],
    request: &QuizRequest,
    picker: &dyn IndexPicker,
) -> QuizDraw {
    let pool = candidates(questions, request);
    if pool.is_empty() {
        return QuizDraw::Exhausted;
    }
    // Out-of-range picks are clamped to the last candidate.
    let index = picker.pick(pool.len()).min(pool.len() - 1);
    QuizDraw::Next(pool[index].clone())
}

//! Question matching rules used by search and category scoping
//!
//! Both filters preserve the order of their input, which the store
//! establishes as ascending question id.

use crate::core::category::CategoryId;
use crate::core::question::Question;

/// Whether the question text contains `term`, ignoring case
///
/// An empty (or all-whitespace) term matches nothing. Surrounding
/// whitespace is part of the term.
pub fn matches_term(question: &Question, term: &str) -> bool {
    if term.trim().is_empty() {
        return false;
    }
    question.text().to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term`, ignoring case
pub fn search<'a>(questions: impl IntoIterator<Item = &'a Question>, term: &str) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| matches_term(q, term))
        .cloned()
        .collect()
}

/// Questions filed under `category`
pub fn by_category<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    category: CategoryId,
) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| q.category == category)
        .cloned()
        .collect()
}

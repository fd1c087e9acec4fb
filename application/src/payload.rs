//! Response payloads
//!
//! Pure data shaping: every successful response carries `success: true`
//! plus the fields of its route. Counts always describe the full filtered
//! set, not the current page.

use serde::Serialize;
use trivia_domain::{CategoryId, CategoryMap, Question, QuestionId, QuizDraw};

/// One page of questions together with the context a listing needs
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    /// Questions on the requested page
    pub questions: Vec<Question>,
    /// Size of the full (filtered) collection
    pub total_questions: usize,
    /// Set when the listing is scoped to a category
    pub current_category: Option<CategoryId>,
    pub categories: CategoryMap,
}

/// `GET /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesPayload {
    pub success: bool,
    pub categories: CategoryMap,
}

impl From<CategoryMap> for CategoriesPayload {
    fn from(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// Listing, search and category-scoped retrieval
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsPayload {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
    pub categories: CategoryMap,
}

impl From<QuestionListing> for QuestionsPayload {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            questions: listing.questions,
            total_questions: listing.total_questions,
            current_category: listing.current_category,
            categories: listing.categories,
        }
    }
}

/// Question creation
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPayload {
    pub success: bool,
    pub created: QuestionId,
}

impl From<&Question> for CreatedPayload {
    fn from(question: &Question) -> Self {
        Self {
            success: true,
            created: question.id,
        }
    }
}

/// Question deletion, with the refreshed listing
#[derive(Debug, Clone, Serialize)]
pub struct DeletedPayload {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

impl DeletedPayload {
    pub fn new(deleted: QuestionId, listing: QuestionListing) -> Self {
        Self {
            success: true,
            deleted,
            questions: listing.questions,
            total_questions: listing.total_questions,
            categories: listing.categories,
        }
    }
}

/// Quiz round; `question` is null once the selection is exhausted
#[derive(Debug, Clone, Serialize)]
pub struct QuizPayload {
    pub success: bool,
    pub question: Option<Question>,
}

impl From<QuizDraw> for QuizPayload {
    fn from(draw: QuizDraw) -> Self {
        Self {
            success: true,
            question: draw.into_question(),
        }
    }
}

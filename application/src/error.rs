//! Use case error types

use crate::ports::catalog_store::StoreError;
use thiserror::Error;
use trivia_domain::{CategoryId, DomainError, Page, QuestionId};

/// Errors that can occur while serving catalog and quiz requests
///
/// Each variant is a distinct outcome; mapping them onto transport
/// status codes is left to the presentation layer.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Page {0} has no questions")]
    EmptyPage(Page),

    #[error("Category {0} does not exist")]
    CategoryNotFound(CategoryId),

    #[error("Question {0} does not exist")]
    QuestionNotFound(QuestionId),

    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Check if the request referred to something that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyPage(_)
                | CatalogError::CategoryNotFound(_)
                | CatalogError::QuestionNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_display() {
        let error = CatalogError::EmptyPage(Page::new(4).unwrap());
        assert_eq!(error.to_string(), "Page 4 has no questions");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(CatalogError::CategoryNotFound(CategoryId::new(9)).is_not_found());
        assert!(CatalogError::QuestionNotFound(QuestionId::new(9)).is_not_found());
        assert!(!CatalogError::InvalidQuestion(DomainError::EmptyQuestion).is_not_found());
        assert!(!CatalogError::Store(StoreError::Other("boom".to_string())).is_not_found());
    }
}

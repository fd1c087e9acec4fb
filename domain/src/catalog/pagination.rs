//! Pagination of ordered question collections
//!
//! Pages are 1-based and hold exactly [`QUESTIONS_PER_PAGE`] items, except
//! the last one. Asking for a page past the end yields an empty slice; the
//! caller decides whether that is an error.

use std::num::NonZeroUsize;

/// Number of questions per page. Not configurable.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Page(NonZeroUsize);

impl Page {
    /// The first page
    pub const FIRST: Page = Page(NonZeroUsize::MIN);

    /// Create a page, returning None for page 0
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Self)
    }

    /// Interpret a raw query-string value
    ///
    /// Missing, non-numeric and non-positive values all fall back to page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn number(self) -> usize {
        self.0.get()
    }

    /// Offset of the first item on this page
    pub fn start(self) -> usize {
        (self.number() - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// Offset one past the last item on this page (unclamped)
    pub fn end(self) -> usize {
        self.start().saturating_add(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Return the items of `page` as a view over `items`, preserving order
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    let start = page.start();
    if start >= items.len() {
        return &[];
    }
    let end = page.end().min(items.len());
    &items[start..end]
}

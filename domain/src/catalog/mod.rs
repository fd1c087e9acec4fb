//! Catalog views over ordered question collections.
//!
//! - [`pagination`] — fixed-size, 1-based pages
//! - [`matching`] — text search and category scoping

pub mod matching;
pub mod pagination;

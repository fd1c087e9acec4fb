//! Presentation layer for trivia-api
//!
//! This crate contains CLI definitions and the HTTP surface: routing,
//! request decoding, and the JSON error envelope.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, TriviaService, build_router};

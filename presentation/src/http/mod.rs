//! HTTP surface
//!
//! - [`router::build_router`] — routes of the trivia API
//! - [`handlers`] — request handlers delegating to the use cases
//! - [`requests`] — request body decoding
//! - [`error::ApiError`] — status codes and the JSON error envelope

pub mod error;
pub mod handlers;
pub mod requests;
pub mod router;

pub use error::ApiError;
pub use router::{TriviaService, build_router};

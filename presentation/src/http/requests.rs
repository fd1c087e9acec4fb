//! Request decoding
//!
//! Bodies are read as raw bytes so that an absent body, malformed JSON and
//! missing fields can each be told apart.

use super::error::ApiError;
use axum::{
    extract::{FromRequestParts, Query},
    http::{Uri, request::Parts},
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::convert::Infallible;
use trivia_domain::{CategoryId, CategorySelector, NewQuestion, Page, QuestionId, QuizRequest};

/// `?page=N` query parameter
///
/// Never rejects: a missing, repeated or unusable value falls back to
/// page 1, and only the first `page` pair counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub Page);

impl<S: Send + Sync> FromRequestParts<S> for PageQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(page_from_uri(&parts.uri)))
    }
}

fn page_from_uri(uri: &Uri) -> Page {
    let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();
    let raw = pairs
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    Page::from_param(raw)
}

/// What a `POST /questions` body asks for
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionSubmission {
    Search(String),
    Create(NewQuestion),
}

#[derive(Debug, Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<CategoryId>,
    #[serde(default, deserialize_with = "lenient_int")]
    difficulty: Option<i64>,
}

/// Accept `3` as well as `"3"`
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::UnprocessableEntity);
    }
    serde_json::from_slice(body).map_err(|_| ApiError::UnprocessableEntity)
}

/// Decode a `POST /questions` body
///
/// A `searchTerm` key selects search mode (`null` searches for nothing);
/// otherwise the body must describe a complete, valid question.
pub fn question_submission(body: &[u8]) -> Result<QuestionSubmission, ApiError> {
    let value = parse_json(body)?;

    if let Some(term) = value.get("searchTerm") {
        return match term {
            Value::String(s) => Ok(QuestionSubmission::Search(s.clone())),
            Value::Null => Ok(QuestionSubmission::Search(String::new())),
            _ => Err(ApiError::UnprocessableEntity),
        };
    }

    let raw: CreateQuestionBody =
        serde_json::from_value(value).map_err(|_| ApiError::UnprocessableEntity)?;
    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (raw.question, raw.answer, raw.category, raw.difficulty)
    else {
        return Err(ApiError::UnprocessableEntity);
    };

    NewQuestion::new(question, answer, category, difficulty)
        .map(QuestionSubmission::Create)
        .map_err(|_| ApiError::UnprocessableEntity)
}

#[derive(Debug, Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    previous_questions: Vec<QuestionId>,
}

#[derive(Debug, Deserialize)]
struct QuizCategory {
    id: CategoryId,
}

/// Decode a `POST /quizzes` body
///
/// No body at all is unprocessable; a JSON body lacking
/// `quiz_category.id` or `previous_questions` is not found.
pub fn quiz_request(body: &[u8]) -> Result<QuizRequest, ApiError> {
    let value = parse_json(body)?;

    let has_category = value
        .get("quiz_category")
        .and_then(|c| c.get("id"))
        .is_some();
    let has_previous = value.get("previous_questions").is_some();
    if !has_category || !has_previous {
        return Err(ApiError::NotFound);
    }

    let quiz: QuizBody = serde_json::from_value(value).map_err(|_| ApiError::UnprocessableEntity)?;
    Ok(QuizRequest::new(
        CategorySelector::from_wire(quiz.quiz_category.id),
        quiz.previous_questions,
    ))
}

/// Parse a question id path segment
pub fn question_id(raw: &str) -> Result<QuestionId, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest)
}

/// Parse a category id path segment
pub fn category_id(raw: &str) -> Result<CategoryId, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest)
}

//! Request handlers
//!
//! Each handler decodes its input, runs one use case, and maps failures
//! onto the status code its route documents.

use super::error::ApiError;
use super::requests::{self, PageQuery, QuestionSubmission};
use super::router::TriviaService;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use trivia_application::{
    CatalogError, CategoriesPayload, CategoryQuestionsInput, CreatedPayload, DeleteQuestionInput,
    DeletedPayload, QuestionsPayload, QuizPayload, SearchQuestionsInput,
};

type AppState = State<Arc<TriviaService>>;

/// Not-found outcomes become 404; anything else becomes `otherwise`.
fn not_found_or(err: CatalogError, otherwise: ApiError) -> ApiError {
    if err.is_not_found() {
        info!("{}", err);
        ApiError::NotFound
    } else {
        log_failure(&err, otherwise);
        otherwise
    }
}

fn log_failure(err: &CatalogError, mapped: ApiError) {
    if mapped == ApiError::Internal {
        error!("{}", err);
    } else {
        warn!("{} -> {}", err, mapped.status());
    }
}

/// `GET /categories`
pub async fn list_categories(
    State(service): AppState,
) -> Result<Json<CategoriesPayload>, ApiError> {
    let categories = service
        .list_categories
        .execute()
        .await
        .map_err(|e| not_found_or(e, ApiError::Internal))?;
    Ok(Json(categories.into()))
}

/// `GET /questions?page=N`
pub async fn list_questions(
    State(service): AppState,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsPayload>, ApiError> {
    let listing = service
        .list_questions
        .execute(page)
        .await
        .map_err(|e| not_found_or(e, ApiError::Internal))?;
    Ok(Json(listing.into()))
}

/// `POST /questions`, either a search or a creation
pub async fn submit_question(
    State(service): AppState,
    PageQuery(page): PageQuery,
    body: Bytes,
) -> Result<Response, ApiError> {
    match requests::question_submission(&body)? {
        QuestionSubmission::Search(term) => {
            let input = SearchQuestionsInput::new(term).with_page(page);
            let listing = service.search_questions.execute(input).await.map_err(|e| {
                log_failure(&e, ApiError::UnprocessableEntity);
                ApiError::UnprocessableEntity
            })?;
            Ok(Json(QuestionsPayload::from(listing)).into_response())
        }
        QuestionSubmission::Create(question) => {
            let created = service.create_question.execute(question).await.map_err(|e| {
                log_failure(&e, ApiError::UnprocessableEntity);
                ApiError::UnprocessableEntity
            })?;
            info!("POST /questions created {}", created.id);
            Ok((StatusCode::OK, Json(CreatedPayload::from(&created))).into_response())
        }
    }
}

/// `DELETE /questions/{id}`
///
/// A miss is a bad request: nothing was removed.
pub async fn delete_question(
    State(service): AppState,
    Path(raw_id): Path<String>,
    PageQuery(page): PageQuery,
) -> Result<Json<DeletedPayload>, ApiError> {
    let id = requests::question_id(&raw_id)?;
    let input = DeleteQuestionInput::new(id).with_page(page);
    let outcome = service.delete_question.execute(input).await.map_err(|e| {
        log_failure(&e, ApiError::BadRequest);
        ApiError::BadRequest
    })?;
    Ok(Json(DeletedPayload::new(outcome.deleted, outcome.listing)))
}

/// `GET /categories/{id}/questions?page=N`
pub async fn category_questions(
    State(service): AppState,
    Path(raw_id): Path<String>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsPayload>, ApiError> {
    let category = requests::category_id(&raw_id)?;
    let input = CategoryQuestionsInput::new(category).with_page(page);
    let listing = service
        .category_questions
        .execute(input)
        .await
        .map_err(|e| not_found_or(e, ApiError::Internal))?;
    Ok(Json(listing.into()))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(service): AppState,
    body: Bytes,
) -> Result<Json<QuizPayload>, ApiError> {
    let request = requests::quiz_request(&body)?;
    let draw = service
        .play_quiz
        .execute(request)
        .await
        .map_err(|e| not_found_or(e, ApiError::Internal))?;
    Ok(Json(draw.into()))
}

//! services/api/src/web/quizzes.rs
//!
//! The quiz endpoint: one random question per call, never repeating one the
//! player has already seen.

use crate::error::{ApiError, Operation, OperationError};
use crate::web::payload::{json_body, QuizRequest};
use crate::web::rest::{ErrorResponse, QuizResponse};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;
use trivia_core::quiz::{category_filter, pick_question};

/// Get the next quiz question.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "The next question, or null when none remain", body = QuizResponse),
        (status = 422, description = "The body is unreadable, incomplete or malformed", body = ErrorResponse)
    )
)]
pub async fn next_quiz_question_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let op = Operation::NextQuizQuestion;
    let selection = json_body(op, payload)?.validate()?;

    let candidates = app_state
        .db
        .quiz_candidates(
            category_filter(selection.category_id),
            &selection.previous_questions,
        )
        .await
        .map_err(|e| OperationError::from_port(op, e))?;

    let question = pick_question(&candidates, &mut rand::thread_rng());
    debug!(
        category_id = selection.category_id,
        asked = selection.previous_questions.len(),
        remaining = candidates.len(),
        "Picked quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(Into::into),
    }))
}

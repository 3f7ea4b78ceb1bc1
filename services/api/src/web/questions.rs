//! services/api/src/web/questions.rs
//!
//! Handlers under `/questions`: listing, creation, deletion and search.

use crate::error::{ApiError, FailureKind, Operation, OperationError};
use crate::web::payload::{json_body, page_of, CreateQuestionRequest, PageQuery, SearchRequest};
use crate::web::rest::{
    category_map, CreatedResponse, DeletedResponse, ErrorResponse, QuestionListResponse,
    QuestionPageResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};
use trivia_core::domain::NewQuestion;
use trivia_core::pagination::paginate;

/// List questions ten per page, with every category.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "A page of questions", body = QuestionListResponse),
        (status = 404, description = "The requested page is empty", body = ErrorResponse)
    )
)]
pub async fn list_questions_handler(
    State(app_state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let op = Operation::ListQuestions;
    let page = page_of(query);

    let questions = app_state
        .db
        .list_questions()
        .await
        .map_err(|e| OperationError::from_port(op, e))?;
    let categories = app_state
        .db
        .list_categories()
        .await
        .map_err(|e| OperationError::from_port(op, e))?;

    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(OperationError::new(
            op,
            FailureKind::NotFound,
            format!("page {} is empty", page),
        )
        .into());
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.iter().map(Into::into).collect(),
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = String, Path, description = "The question to delete.")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 422, description = "No such question, or the delete failed", body = ErrorResponse)
    )
)]
pub async fn delete_question_handler(
    State(app_state): State<Arc<AppState>>,
    Path(question_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let op = Operation::DeleteQuestion;
    let id = question_id.trim().parse::<i64>().map_err(|_| {
        OperationError::new(
            op,
            FailureKind::Invalid,
            format!("'{}' is not a question id", question_id),
        )
    })?;

    let question = app_state
        .db
        .get_question(id)
        .await
        .map_err(|e| OperationError::from_port(op, e))?;
    app_state
        .db
        .delete_question(question.id)
        .await
        .map_err(|e| OperationError::from_port(op, e))?;
    info!(question_id = id, "Deleted question");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Create a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreatedResponse),
        (status = 400, description = "A field is missing or the body is not JSON", body = ErrorResponse),
        (status = 404, description = "A field is the empty string", body = ErrorResponse),
        (status = 422, description = "A field is malformed or the insert failed", body = ErrorResponse)
    )
)]
pub async fn create_question_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let op = Operation::CreateQuestion;
    let fields = json_body(op, payload)?.validate()?;

    let created = app_state
        .db
        .create_question(NewQuestion {
            question: fields.question,
            answer: fields.answer,
            difficulty: fields.difficulty,
            category: fields.category,
        })
        .await
        .map_err(|e| {
            // A missing row cannot come out of an insert; anything here is a store failure.
            OperationError::new(op, FailureKind::Store, e.to_string())
        })?;
    info!(question_id = created.id, category = created.category, "Created question");

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
    }))
}

/// Search question text for a case-insensitive substring.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    params(PageQuery),
    responses(
        (status = 200, description = "A page of matching questions; empty past the last page", body = QuestionPageResponse),
        (status = 400, description = "The body is not JSON", body = ErrorResponse),
        (status = 404, description = "Nothing matched", body = ErrorResponse),
        (status = 422, description = "The search term is missing or empty", body = ErrorResponse)
    )
)]
pub async fn search_questions_handler(
    State(app_state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let op = Operation::SearchQuestions;
    let page = page_of(query);
    let request = json_body(op, payload)?;
    let term = request.term()?;

    let matches = app_state
        .db
        .search_questions(term)
        .await
        .map_err(|e| OperationError::from_port(op, e))?;

    if matches.is_empty() {
        return Err(OperationError::new(
            op,
            FailureKind::NotFound,
            format!("no matches for '{}'", term),
        )
        .into());
    }
    let current = paginate(&matches, page);
    debug!(term, page, total = matches.len(), "Search matched questions");

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: current.iter().map(Into::into).collect(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

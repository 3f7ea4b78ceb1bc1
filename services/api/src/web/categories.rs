//! services/api/src/web/categories.rs
//!
//! Handlers under `/categories`.

use crate::error::{ApiError, FailureKind, Operation, OperationError};
use crate::web::payload::{page_of, PageQuery};
use crate::web::rest::{category_map, CategoriesResponse, ErrorResponse, QuestionPageResponse};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;
use trivia_core::pagination::paginate;

/// List every category as an id to type mapping.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorResponse)
    )
)]
pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let op = Operation::ListCategories;
    let categories = app_state
        .db
        .list_categories()
        .await
        .map_err(|e| OperationError::from_port(op, e))?;

    if categories.is_empty() {
        return Err(OperationError::new(op, FailureKind::NotFound, "no categories").into());
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// List the questions of one category, ten per page.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i64, Path, description = "The category to filter on."),
        PageQuery
    ),
    responses(
        (status = 200, description = "A page of the category's questions", body = QuestionPageResponse),
        (status = 404, description = "No questions on this page, or the lookup failed", body = ErrorResponse)
    )
)]
pub async fn list_category_questions_handler(
    State(app_state): State<Arc<AppState>>,
    Path(category_id): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let op = Operation::ListCategoryQuestions;
    let category_id = category_id.trim().parse::<i64>().map_err(|_| {
        OperationError::new(
            op,
            FailureKind::Invalid,
            format!("'{}' is not a category id", category_id),
        )
    })?;
    let page = page_of(query);

    let questions = app_state
        .db
        .questions_in_category(category_id)
        .await
        .map_err(|e| OperationError::from_port(op, e))?;

    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(OperationError::new(
            op,
            FailureKind::NotFound,
            format!("no questions in category {} on page {}", category_id, page),
        )
        .into());
    }
    debug!(category_id, page, total = questions.len(), "Listing category questions");

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: current.iter().map(Into::into).collect(),
        total_questions: questions.len(),
        current_category: Some(category_id),
    }))
}

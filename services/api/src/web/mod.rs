pub mod categories;
pub mod middleware;
pub mod payload;
pub mod questions;
pub mod quizzes;
pub mod rest;
pub mod state;

use crate::web::{
    categories::{list_categories_handler, list_category_questions_handler},
    middleware::{
        allow_headers_header, allow_methods_header, cors_layer, method_not_allowed,
        route_not_found,
    },
    questions::{
        create_question_handler, delete_question_handler, list_questions_handler,
        search_questions_handler,
    },
    quizzes::next_quiz_question_handler,
    state::AppState,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the API router with its CORS layer, request tracing and JSON fallbacks.
pub fn router(app_state: Arc<AppState>) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/{category_id}/questions",
            get(list_category_questions_handler),
        )
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/{question_id}", delete(delete_question_handler))
        .route("/quizzes", post(next_quiz_question_handler))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(allow_methods_header())
        .layer(allow_headers_header())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

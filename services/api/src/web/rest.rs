//! services/api/src/web/rest.rs
//!
//! Contains the response payloads shared by the REST handlers and the master
//! definition for the OpenAPI specification.

use crate::web::{categories, payload, questions, quizzes};
use serde::Serialize;
use std::collections::BTreeMap;
use trivia_core::domain::{Category, Question};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::list_categories_handler,
        categories::list_category_questions_handler,
        questions::list_questions_handler,
        questions::delete_question_handler,
        questions::create_question_handler,
        questions::search_questions_handler,
        quizzes::next_quiz_question_handler,
    ),
    components(
        schemas(
            QuestionView,
            CategoriesResponse,
            QuestionListResponse,
            QuestionPageResponse,
            DeletedResponse,
            CreatedResponse,
            QuizResponse,
            ErrorResponse,
            payload::CreateQuestionRequest,
            payload::SearchRequest,
            payload::QuizRequest,
        )
    ),
    tags(
        (name = "Trivia API", description = "Questions, categories and quiz play for the trivia game.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// Category id to category type.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// A question as it appears in every response.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        q.clone().into()
    }
}

#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// `GET /questions`.
#[derive(Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

/// Search results and category listings.
#[derive(Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    /// The id exactly as it appeared in the request path.
    pub deleted: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every candidate has been asked.
    pub question: Option<QuestionView>,
}

/// The body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

//! services/api/src/web/payload.rs
//!
//! Request payloads accepted by the REST endpoints, and the rules for reading the
//! loosely-typed JSON values the browser client sends.

use crate::error::{FailureKind, Operation, OperationError};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

//=========================================================================================
// Query Parameters
//=========================================================================================

/// `?page=N`. Anything that does not parse as an integer means page 1.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// The requested page; a rejected query string counts as no `page` at all.
pub fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(q)| q).unwrap_or_default().page()
}

//=========================================================================================
// Bodies
//=========================================================================================

/// Unwraps a JSON body, reporting an unreadable one as a failure of `operation`.
pub fn json_body<T>(
    operation: Operation,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, OperationError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        OperationError::new(operation, FailureKind::MalformedBody, rejection.body_text())
    })
}

/// Body of `POST /questions`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(value_type = String)]
    pub question: Option<Value>,
    #[schema(value_type = String)]
    pub answer: Option<Value>,
    #[schema(value_type = i32)]
    pub difficulty: Option<Value>,
    #[schema(value_type = i64)]
    pub category: Option<Value>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    #[schema(value_type = String)]
    pub search_term: Option<Value>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// `{"id": <category id>}`; id `0` selects every category.
    #[schema(value_type = Object)]
    pub quiz_category: Option<Value>,
    #[schema(value_type = Vec<i64>)]
    pub previous_questions: Option<Value>,
}

//=========================================================================================
// Field Readers
//=========================================================================================

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// Returns the field, failing with `MissingField` when it is absent or null.
fn required<'a>(
    operation: Operation,
    name: &str,
    value: &'a Option<Value>,
) -> Result<&'a Value, OperationError> {
    match value {
        Some(Value::Null) | None => Err(OperationError::new(
            operation,
            FailureKind::MissingField,
            format!("'{}' is required", name),
        )),
        Some(v) => Ok(v),
    }
}

fn invalid(operation: Operation, name: &str, value: &Value) -> OperationError {
    OperationError::new(
        operation,
        FailureKind::Invalid,
        format!("'{}' has an unusable value: {}", name, value),
    )
}

/// Reads an integer given either as a JSON number or as a numeric string.
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A validated `POST /questions` body.
#[derive(Debug, PartialEq, Eq)]
pub struct QuestionFields {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl CreateQuestionRequest {
    pub fn validate(&self) -> Result<QuestionFields, OperationError> {
        let op = Operation::CreateQuestion;
        let fields = [
            ("question", required(op, "question", &self.question)?),
            ("answer", required(op, "answer", &self.answer)?),
            ("difficulty", required(op, "difficulty", &self.difficulty)?),
            ("category", required(op, "category", &self.category)?),
        ];

        if let Some((name, _)) = fields.iter().find(|(_, v)| is_empty_string(v)) {
            return Err(OperationError::new(
                op,
                FailureKind::EmptyField,
                format!("'{}' must not be empty", name),
            ));
        }

        let [(_, question), (_, answer), (_, difficulty), (_, category)] = fields;
        Ok(QuestionFields {
            question: text(question).ok_or_else(|| invalid(op, "question", question))?,
            answer: text(answer).ok_or_else(|| invalid(op, "answer", answer))?,
            difficulty: integer(difficulty)
                .and_then(|d| i32::try_from(d).ok())
                .ok_or_else(|| invalid(op, "difficulty", difficulty))?,
            category: integer(category).ok_or_else(|| invalid(op, "category", category))?,
        })
    }
}

impl SearchRequest {
    /// Returns the non-empty search term.
    pub fn term(&self) -> Result<&str, OperationError> {
        let op = Operation::SearchQuestions;
        match &self.search_term {
            None | Some(Value::Null) => Err(OperationError::new(
                op,
                FailureKind::MissingField,
                "'searchTerm' is required",
            )),
            Some(Value::String(s)) if s.is_empty() => Err(OperationError::new(
                op,
                FailureKind::EmptyField,
                "'searchTerm' must not be empty",
            )),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(invalid(op, "searchTerm", other)),
        }
    }
}

/// A validated `POST /quizzes` body.
#[derive(Debug, PartialEq, Eq)]
pub struct QuizSelection {
    pub category_id: i64,
    pub previous_questions: Vec<i64>,
}

impl QuizRequest {
    pub fn validate(&self) -> Result<QuizSelection, OperationError> {
        let op = Operation::NextQuizQuestion;
        let quiz_category = required(op, "quiz_category", &self.quiz_category)?;
        let previous = required(op, "previous_questions", &self.previous_questions)?;

        for (name, value) in [("quiz_category", quiz_category), ("previous_questions", previous)] {
            if is_empty_string(value) {
                return Err(OperationError::new(
                    op,
                    FailureKind::EmptyField,
                    format!("'{}' must not be empty", name),
                ));
            }
        }

        let id = quiz_category
            .get("id")
            .ok_or_else(|| invalid(op, "quiz_category", quiz_category))?;
        let category_id = integer(id).ok_or_else(|| invalid(op, "quiz_category.id", id))?;

        let previous_questions = previous
            .as_array()
            .ok_or_else(|| invalid(op, "previous_questions", previous))?
            .iter()
            .map(|v| integer(v).ok_or_else(|| invalid(op, "previous_questions", v)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizSelection {
            category_id,
            previous_questions,
        })
    }
}

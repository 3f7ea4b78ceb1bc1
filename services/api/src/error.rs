//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service, and the table that
//! maps each operation's failures onto an HTTP status.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use trivia_core::ports::PortError;
use tracing::{error, warn};

//=========================================================================================
// Operation Failures
//=========================================================================================

/// The endpoint an operation failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCategories,
    ListQuestions,
    DeleteQuestion,
    CreateQuestion,
    SearchQuestions,
    ListCategoryQuestions,
    NextQuizQuestion,
}

/// What went wrong inside an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Empty result set or missing row.
    NotFound,
    /// A required body field is absent.
    MissingField,
    /// A required body field is the empty string.
    EmptyField,
    /// A value could not be interpreted (e.g. a non-numeric id).
    Invalid,
    /// The body is not JSON, or not sent as JSON.
    MalformedBody,
    /// The store rejected or failed the query.
    Store,
}

/// Maps an operation failure onto its HTTP status.
pub fn status_for(operation: Operation, kind: FailureKind) -> StatusCode {
    use FailureKind as K;
    use Operation as O;

    match (operation, kind) {
        (O::ListCategories | O::ListQuestions, K::NotFound) => StatusCode::NOT_FOUND,
        (O::ListCategories | O::ListQuestions, _) => StatusCode::INTERNAL_SERVER_ERROR,

        (O::DeleteQuestion, _) => StatusCode::UNPROCESSABLE_ENTITY,

        (O::CreateQuestion, K::MissingField | K::MalformedBody) => StatusCode::BAD_REQUEST,
        // Empty fields answer 404 here, unlike search and quizzes.
        (O::CreateQuestion, K::EmptyField | K::NotFound) => StatusCode::NOT_FOUND,
        (O::CreateQuestion, K::Invalid | K::Store) => StatusCode::UNPROCESSABLE_ENTITY,

        (O::SearchQuestions, K::MissingField | K::EmptyField | K::Invalid) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        (O::SearchQuestions, K::MalformedBody) => StatusCode::BAD_REQUEST,
        (O::SearchQuestions, K::NotFound | K::Store) => StatusCode::NOT_FOUND,

        (O::ListCategoryQuestions, _) => StatusCode::NOT_FOUND,

        (O::NextQuizQuestion, _) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// A failure raised by one of the API operations.
#[derive(Debug, thiserror::Error)]
#[error("{operation:?} failed ({kind:?}): {detail}")]
pub struct OperationError {
    pub operation: Operation,
    pub kind: FailureKind,
    pub detail: String,
}

impl OperationError {
    pub fn new(operation: Operation, kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            detail: detail.into(),
        }
    }

    /// Classifies a store error raised while serving `operation`.
    pub fn from_port(operation: Operation, err: PortError) -> Self {
        match err {
            PortError::NotFound(detail) => Self::new(operation, FailureKind::NotFound, detail),
            PortError::Unexpected(detail) => Self::new(operation, FailureKind::Store, detail),
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.operation, self.kind)
    }
}

//=========================================================================================
// ApiError
//=========================================================================================

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A handled failure of one of the endpoints.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents an error from running the database migrations.
    #[error("Migration Error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Operation(op) => op.status(),
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The client-facing reason phrase for an error status.
fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected with {}: {}", status.as_u16(), self);
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message_for(status),
        }));

        (status, body).into_response()
    }
}

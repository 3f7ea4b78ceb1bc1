//! crates/trivia_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the concrete relational store behind them.

use async_trait::async_trait;
use crate::domain::{Category, NewQuestion, Question};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Store Port (Trait)
//=========================================================================================

/// The question/category store.
///
/// Every listing is returned in the store's default order (ascending id), which is
/// the order pagination slices over.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    // --- Categories ---
    async fn list_categories(&self) -> PortResult<Vec<Category>>;

    // --- Questions ---
    async fn list_questions(&self) -> PortResult<Vec<Question>>;

    /// Fails with `PortError::NotFound` when no row has this id.
    async fn get_question(&self, question_id: i64) -> PortResult<Question>;

    /// Fails with `PortError::NotFound` when no row has this id.
    async fn delete_question(&self, question_id: i64) -> PortResult<()>;

    async fn create_question(&self, new_question: NewQuestion) -> PortResult<Question>;

    /// Case-insensitive substring match against the question text.
    async fn search_questions(&self, term: &str) -> PortResult<Vec<Question>>;

    async fn questions_in_category(&self, category_id: i64) -> PortResult<Vec<Question>>;

    // --- Quiz ---
    /// Questions in `category` (or in any category when `None`) whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> PortResult<Vec<Question>>;
}

//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use std::sync::Arc;
use trivia_core::ports::QuestionStore;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn QuestionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Arc<dyn QuestionStore>, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}

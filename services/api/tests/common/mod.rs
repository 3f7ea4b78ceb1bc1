//! Shared helpers for the API integration tests: an in-memory `QuestionStore`
//! and small request/response utilities around the real router.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;
use trivia_api::{config::Config, web::router, web::state::AppState};
use trivia_core::domain::{Category, NewQuestion, Question};
use trivia_core::ports::{PortError, PortResult, QuestionStore};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

/// A `QuestionStore` over in-process vectors, with the same ordering and
/// referential rules as the PostgreSQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six categories the migrations seed.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (id, kind) in [
            (1, "Science"),
            (2, "Art"),
            (3, "Geography"),
            (4, "History"),
            (5, "Entertainment"),
            (6, "Sports"),
        ] {
            store.add_category(id, kind);
        }
        store
    }

    pub fn add_category(&self, id: i64, kind: &str) {
        self.tables.lock().unwrap().categories.push(Category {
            id,
            kind: kind.to_string(),
        });
    }

    pub fn add_question(&self, question: &str, answer: &str, difficulty: i32, category: i64) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.questions.push(Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty,
            category,
        });
        id
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.tables.lock().unwrap().questions.iter().map(|q| q.id).collect()
    }

    /// Makes every subsequent call fail as if the database were unreachable.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> PortResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PortError::Unexpected("connection refused".to_string()));
        }
        Ok(())
    }

    fn filtered<F: Fn(&Question) -> bool>(&self, keep: F) -> PortResult<Vec<Question>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        self.filtered(|_| true)
    }

    async fn get_question(&self, question_id: i64) -> PortResult<Question> {
        self.filtered(|q| q.id == question_id)?
            .pop()
            .ok_or_else(|| PortError::NotFound(format!("Question {} not found", question_id)))
    }

    async fn delete_question(&self, question_id: i64) -> PortResult<()> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != question_id);
        if tables.questions.len() == before {
            return Err(PortError::NotFound(format!("Question {} not found", question_id)));
        }
        Ok(())
    }

    async fn create_question(&self, new_question: NewQuestion) -> PortResult<Question> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.iter().any(|c| c.id == new_question.category) {
            return Err(PortError::Unexpected(
                "violates foreign key constraint".to_string(),
            ));
        }
        if new_question.difficulty <= 0 {
            return Err(PortError::Unexpected("violates check constraint".to_string()));
        }
        tables.next_id += 1;
        let question = Question {
            id: tables.next_id,
            question: new_question.question,
            answer: new_question.answer,
            difficulty: new_question.difficulty,
            category: new_question.category,
        };
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn search_questions(&self, term: &str) -> PortResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.filtered(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn questions_in_category(&self, category_id: i64) -> PortResult<Vec<Question>> {
        self.filtered(|q| q.category == category_id)
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> PortResult<Vec<Question>> {
        self.filtered(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        })
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/trivia_test".to_string()),
        _ => None,
    })
    .expect("test configuration is valid")
}

pub fn app(store: Arc<InMemoryStore>) -> Router {
    router(Arc::new(AppState::new(store, Arc::new(test_config()))))
}

/// Sends one request through the router and returns the status and JSON body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected body: {}", body);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert!(body["message"].is_string());
}

//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `QuestionStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use trivia_core::domain::{Category, NewQuestion, Question};
use trivia_core::ports::{PortError, PortResult, QuestionStore};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `QuestionStore` port.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    /// Creates a new `PgQuestionStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Closes every pooled connection. Called once the server has shut down.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Escapes `%`, `_` and `\` so the term is matched literally inside `ILIKE`.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct CategoryRecord {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}
impl CategoryRecord {
    fn to_domain(self) -> Category {
        Category {
            id: self.id,
            kind: self.kind,
        }
    }
}

#[derive(FromRow)]
struct QuestionRecord {
    id: i64,
    question: String,
    answer: String,
    difficulty: i32,
    category: i64,
}
impl QuestionRecord {
    fn to_domain(self) -> Question {
        Question {
            id: self.id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

fn to_questions(records: Vec<QuestionRecord>) -> Vec<Question> {
    records.into_iter().map(|r| r.to_domain()).collect()
}

//=========================================================================================
// `QuestionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            "SELECT id, type FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(to_questions(records))
    }

    async fn get_question(&self, question_id: i64) -> PortResult<Question> {
        let record = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = $1",
        )
        .bind(question_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                PortError::NotFound(format!("Question {} not found", question_id))
            }
            _ => unexpected(e),
        })?;
        Ok(record.to_domain())
    }

    async fn delete_question(&self, question_id: i64) -> PortResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }
        Ok(())
    }

    async fn create_question(&self, new_question: NewQuestion) -> PortResult<Question> {
        let record = sqlx::query_as::<_, QuestionRecord>(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, difficulty, category",
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.difficulty)
        .bind(new_question.category)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(record.to_domain())
    }

    async fn search_questions(&self, term: &str) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(to_questions(records))
    }

    async fn questions_in_category(&self, category_id: i64) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE category = $1 ORDER BY id ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(to_questions(records))
    }

    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE ($1::BIGINT IS NULL OR category = $1) AND NOT (id = ANY($2)) \
             ORDER BY id ASC",
        )
        .bind(category)
        .bind(exclude.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(to_questions(records))
    }
}

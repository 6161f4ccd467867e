//! The question store trait.
//!
//! Implemented by `MemoryStore` in this crate and by the SQLite store in
//! `trivia-store`. All listings are ordered by identifier ascending.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Persistence backend for questions and categories.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Human-readable backend name (e.g. "sqlite").
    fn name(&self) -> &str;

    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Look up a single category.
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// Add a category and return it with its assigned id.
    async fn insert_category(&self, kind: &str) -> Result<Category, StoreError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions in one category, ordered by id.
    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Look up a single question.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Store a question and return it with its assigned id.
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError>;

    /// Remove a question. Returns `false` if it did not exist.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError>;

    /// Total number of stored questions.
    async fn count_questions(&self) -> Result<u64, StoreError>;
}

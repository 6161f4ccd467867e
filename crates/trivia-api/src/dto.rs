//! Request and response bodies.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use trivia_core::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::quiz::QuizCategory;

use crate::error::ApiError;

/// An integer that clients may send either as a JSON number or as a numeric
/// string (HTML form values arrive as strings).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleInt {
    Number(i64),
    Text(String),
}

impl FlexibleInt {
    pub fn value(&self) -> Option<i64> {
        match self {
            FlexibleInt::Number(n) => Some(*n),
            FlexibleInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `category -> type` map used by several responses.
pub fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

/// Body of `POST /questions` when creating.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<FlexibleInt>,
    #[serde(default)]
    pub difficulty: Option<FlexibleInt>,
}

impl CreateQuestionRequest {
    /// Require every field and convert to a `NewQuestion`.
    pub fn into_new_question(self) -> Result<NewQuestion, ApiError> {
        let question = self
            .question
            .ok_or_else(|| ApiError::unprocessable("missing question"))?;
        let answer = self
            .answer
            .ok_or_else(|| ApiError::unprocessable("missing answer"))?;
        let category = self
            .category
            .as_ref()
            .and_then(FlexibleInt::value)
            .ok_or_else(|| ApiError::unprocessable("missing or invalid category"))?;
        let difficulty = self
            .difficulty
            .as_ref()
            .and_then(FlexibleInt::value)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| ApiError::unprocessable("missing or invalid difficulty"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// The `quiz_category` object of a quiz request.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    pub id: FlexibleInt,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRef>,
}

impl QuizRequest {
    pub fn category(&self) -> Result<QuizCategory, ApiError> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id.value())
            .map(QuizCategory::from_id)
            .ok_or_else(|| ApiError::unprocessable("missing or invalid quiz_category"))
    }

    pub fn served(&self) -> HashSet<QuestionId> {
        self.previous_questions.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: BTreeMap<CategoryId, String>,
    /// Categories of the questions on this page.
    pub current_category: Vec<CategoryId>,
    pub page: u32,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: QuestionId,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: QuestionId,
    pub question: Question,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every eligible question has been asked.
    pub question: Option<Question>,
}

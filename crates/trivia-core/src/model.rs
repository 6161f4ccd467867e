//! Core data model types for the question bank.

use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Identifier of a question. Assigned by the store, never reused.
pub type QuestionId = i64;

/// Identifier of a category.
pub type CategoryId = i64;

/// Lowest accepted difficulty rating.
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest accepted difficulty rating.
pub const MAX_DIFFICULTY: u8 = 5;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// The question text shown to players.
    pub question: String,
    pub answer: String,
    /// Category this question belongs to.
    pub category: CategoryId,
    pub difficulty: u8,
}

/// A question category such as "Science" or "History".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name. Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: u8,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Check the fields that can be validated without a store.
    ///
    /// Category existence is checked separately by `catalog::create_question`.
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.question.trim().is_empty() {
            return Err(TriviaError::unprocessable("question text is empty"));
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::unprocessable("answer text is empty"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(TriviaError::unprocessable(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Attach a store-assigned identifier.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

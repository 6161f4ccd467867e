//! Error types for the question bank.
//!
//! `StoreError` covers persistence failures and is always an internal error
//! from the client's point of view. `TriviaError` is the taxonomy every
//! request-level operation returns.

use thiserror::Error;

/// Errors raised by a `QuestionStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed a statement.
    #[error("database error: {0}")]
    Backend(String),

    /// A lock guarding store state was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// A blocking store task was cancelled or panicked.
    #[error("store task failed: {0}")]
    Task(String),
}

/// Errors returned by question bank operations.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// A referenced question or category does not exist, or a listing that
    /// must not be empty came back empty.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was well-formed but its content is invalid.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// The request could not be decoded at all.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TriviaError {
    pub fn not_found(what: impl Into<String>) -> Self {
        TriviaError::NotFound(what.into())
    }

    pub fn unprocessable(why: impl Into<String>) -> Self {
        TriviaError::Unprocessable(why.into())
    }

    /// Returns `true` if this error originates in the store rather than in
    /// the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, TriviaError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_are_internal() {
        let err: TriviaError = StoreError::Backend("disk full".into()).into();
        assert!(err.is_internal());
        assert_eq!(err.to_string(), "database error: disk full");
    }

    #[test]
    fn input_errors_are_not_internal() {
        assert!(!TriviaError::not_found("question 7").is_internal());
        assert!(!TriviaError::unprocessable("missing answer").is_internal());
        assert!(!TriviaError::BadRequest("not json".into()).is_internal());
    }
}

//! Random quiz question selection.
//!
//! A quiz round is driven entirely by the caller: each request carries the
//! ids already asked, and the selector draws uniformly from what remains.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TriviaError;
use crate::model::{CategoryId, Question, QuestionId};
use crate::traits::QuestionStore;

/// Wire id meaning "questions from every category".
pub const ALL_CATEGORIES: CategoryId = 0;

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(CategoryId),
}

impl QuizCategory {
    /// Map a wire category id to a filter. `0` means all categories.
    pub fn from_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Category(id)
        }
    }
}

/// Result of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question not asked before in this round.
    Question(Question),
    /// Every eligible question has been asked.
    Exhausted,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Question(q) => Some(q),
            QuizOutcome::Exhausted => None,
        }
    }
}

/// Load the questions a round may draw from, before exclusions.
///
/// An unknown concrete category is `NotFound`, never an empty pool.
pub async fn eligible_pool<S>(
    store: &S,
    category: QuizCategory,
) -> Result<Vec<Question>, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    match category {
        QuizCategory::All => Ok(store.list_questions().await?),
        QuizCategory::Category(id) => {
            if store.get_category(id).await?.is_none() {
                return Err(TriviaError::not_found(format!("category {id}")));
            }
            Ok(store.list_questions_by_category(id).await?)
        }
    }
}

/// Draw one question uniformly from `pool` minus `previously_served`.
pub fn choose_question<R>(
    pool: Vec<Question>,
    previously_served: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previously_served.contains(&q.id))
        .collect();

    match remaining.choose(rng) {
        Some(q) => QuizOutcome::Question(q.clone()),
        None => QuizOutcome::Exhausted,
    }
}

/// Pick the next quiz question for a round.
pub async fn next_question<S>(
    store: &S,
    category: QuizCategory,
    previously_served: &HashSet<QuestionId>,
) -> Result<QuizOutcome, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    let pool = eligible_pool(store, category).await?;
    let pool_size = pool.len();
    let outcome = choose_question(pool, previously_served, &mut rand::thread_rng());

    match &outcome {
        QuizOutcome::Question(q) => tracing::debug!(
            question_id = q.id,
            pool_size,
            served = previously_served.len(),
            "quiz question selected"
        ),
        QuizOutcome::Exhausted => tracing::debug!(
            ?category,
            pool_size,
            served = previously_served.len(),
            "quiz pool exhausted"
        ),
    }

    Ok(outcome)
}

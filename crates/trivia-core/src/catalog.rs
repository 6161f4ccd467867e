//! Request-level question bank operations.
//!
//! Each function resolves one API operation against a `QuestionStore` and
//! reports failures through the `TriviaError` taxonomy.

use std::collections::BTreeSet;

use crate::error::TriviaError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::paginate::{paginate, total_pages};
use crate::traits::QuestionStore;

/// One page of the question listing.
#[derive(Debug, Clone)]
pub struct QuestionsPage {
    pub page: u32,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub total_pages: u64,
    /// Every category, for the category sidebar.
    pub categories: Vec<Category>,
    /// Distinct categories of the questions on this page, ascending.
    pub current_categories: Vec<CategoryId>,
}

/// All questions of one category.
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// List every category. An empty store is `NotFound`.
pub async fn list_categories<S>(store: &S) -> Result<Vec<Category>, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    let categories = store.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::not_found("no categories"));
    }
    Ok(categories)
}

/// Load one page of questions ordered by id. An empty page is `NotFound`.
pub async fn questions_page<S>(store: &S, page: u32) -> Result<QuestionsPage, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    let all = store.list_questions().await?;
    let questions = paginate(page, &all).to_vec();
    if questions.is_empty() {
        return Err(TriviaError::not_found(format!("page {page}")));
    }

    let current_categories: BTreeSet<CategoryId> = questions.iter().map(|q| q.category).collect();
    let total_questions = all.len() as u64;

    Ok(QuestionsPage {
        page,
        questions,
        total_questions,
        total_pages: total_pages(total_questions),
        categories: store.list_categories().await?,
        current_categories: current_categories.into_iter().collect(),
    })
}

/// Hard-delete a question.
pub async fn delete_question<S>(store: &S, id: QuestionId) -> Result<QuestionId, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    if !store.delete_question(id).await? {
        return Err(TriviaError::not_found(format!("question {id}")));
    }
    tracing::info!(question_id = id, "question deleted");
    Ok(id)
}

/// Validate and store a new question.
///
/// The category must already exist; otherwise the request is `Unprocessable`.
pub async fn create_question<S>(store: &S, question: NewQuestion) -> Result<Question, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    question.validate()?;
    if store.get_category(question.category).await?.is_none() {
        return Err(TriviaError::unprocessable(format!(
            "category {} does not exist",
            question.category
        )));
    }

    let stored = store.insert_question(&question).await?;
    tracing::info!(
        question_id = stored.id,
        category = stored.category,
        "question created"
    );
    Ok(stored)
}

/// Case-insensitive substring search over question text.
pub async fn search_questions<S>(store: &S, term: &str) -> Result<Vec<Question>, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    let hits = store.search_questions(term).await?;
    tracing::debug!(term, hits = hits.len(), "question search");
    Ok(hits)
}

/// All questions of a category. An unknown category is `NotFound`.
pub async fn questions_in_category<S>(
    store: &S,
    id: CategoryId,
) -> Result<CategoryQuestions, TriviaError>
where
    S: QuestionStore + ?Sized,
{
    let category = store
        .get_category(id)
        .await?
        .ok_or_else(|| TriviaError::not_found(format!("category {id}")))?;
    let questions = store.list_questions_by_category(id).await?;
    Ok(CategoryQuestions {
        category,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    async fn seeded(questions: usize) -> MemoryStore {
        let store = MemoryStore::new();
        let science = store.insert_category("Science").await.unwrap();
        let art = store.insert_category("Art").await.unwrap();
        for i in 0..questions {
            let category = if i % 2 == 0 { science.id } else { art.id };
            store
                .insert_question(&NewQuestion::new(format!("question {i}"), "answer", category, 2))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn empty_store_has_no_categories() {
        let store = MemoryStore::new();
        let err = list_categories(&store).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn page_reports_totals_and_categories() {
        let store = seeded(23).await;
        let page = questions_page(&store, 3).await.unwrap();
        assert_eq!(page.questions.len(), 3);
        assert_eq!(page.questions[0].id, 21);
        assert_eq!(page.total_questions, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.current_categories, vec![1, 2]);
    }

    #[tokio::test]
    async fn page_past_end_is_not_found() {
        let store = seeded(20).await;
        let err = questions_page(&store, 3).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let store = seeded(2).await;
        assert_eq!(delete_question(&store, 1).await.unwrap(), 1);
        let err = delete_question(&store, 1).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
        assert_eq!(store.count_questions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_requires_existing_category() {
        let store = seeded(0).await;
        let err = create_question(&store, NewQuestion::new("q?", "a", 42, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::Unprocessable(_)));
        assert_eq!(store.count_questions().await.unwrap(), 0);

        let created = create_question(&store, NewQuestion::new("q?", "a", 2, 1))
            .await
            .unwrap();
        assert_eq!(created.category, 2);
        assert_eq!(store.count_questions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_before_store() {
        let store = seeded(0).await;
        let err = create_question(&store, NewQuestion::new("", "a", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::Unprocessable(_)));
    }

    #[tokio::test]
    async fn category_listing() {
        let store = seeded(5).await;
        let art = questions_in_category(&store, 2).await.unwrap();
        assert_eq!(art.category.kind, "Art");
        assert_eq!(art.questions.len(), 2);
        assert!(art.questions.iter().all(|q| q.category == 2));

        let err = questions_in_category(&store, 1000).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_finds_substring() {
        let store = seeded(12).await;
        let hits = search_questions(&store, "QUESTION 1").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 11, 12]);
    }
}

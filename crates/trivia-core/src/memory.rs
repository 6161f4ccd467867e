//! In-memory question store.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::traits::QuestionStore;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_category_id: CategoryId,
    last_question_id: QuestionId,
}

/// A `QuestionStore` kept entirely in process memory.
///
/// Ids start at 1 and are never reused, even after deletes. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, StoreError> {
        let mut tables = self.write()?;
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            kind: kind.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.write()?;
        tables.last_question_id += 1;
        let stored = question.clone().into_question(tables.last_question_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.questions.len() as u64)
    }
}

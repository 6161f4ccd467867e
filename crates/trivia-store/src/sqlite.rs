//! SQLite-backed question store.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use trivia_core::error::StoreError;
use trivia_core::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::traits::QuestionStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// A `QuestionStore` persisted in a SQLite database file.
///
/// One connection is shared behind a mutex; statements run on tokio's
/// blocking pool.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory: {}", parent.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database: {}", path.display()))?;
        tracing::info!(path = %path.display(), "opened sqlite store");
        Self::from_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")
            .context("failed to set journal mode")?;
        conn.pragma_update(None, "busy_timeout", 3000i64)
            .context("failed to set busy timeout")?;
        conn.execute_batch(SCHEMA)
            .context("failed to initialize schema")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard).map_err(backend)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

fn backend(err: rusqlite::Error) -> StoreError {
    tracing::error!(error = %err, "sqlite statement failed");
    StoreError::Backend(err.to_string())
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    let difficulty: i64 = row.get(4)?;
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: u8::try_from(difficulty).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Integer,
                Box::new(e),
            )
        })?,
    })
}

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}

fn query_questions(
    conn: &Connection,
    filter: &str,
    params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<Question>> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions {filter} ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, row_to_question)?;
    rows.collect()
}

#[async_trait]
impl QuestionStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
            let rows = stmt.query_map([], row_to_category)?;
            rows.collect()
        })
        .await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                row_to_category,
            )
            .optional()
        })
        .await
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, StoreError> {
        let kind = kind.to_string();
        self.with_conn(move |conn| {
            conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;
            Ok(Category {
                id: conn.last_insert_rowid(),
                kind,
            })
        })
        .await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.with_conn(|conn| query_questions(conn, "", params![])).await
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        self.with_conn(move |conn| query_questions(conn, "WHERE category = ?1", params![category]))
            .await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let term = term.to_string();
        self.with_conn(move |conn| {
            query_questions(
                conn,
                "WHERE instr(lower(question), lower(?1)) > 0",
                params![term],
            )
        })
        .await
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.with_conn(move |conn| {
            conn.query_row(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                params![id],
                row_to_question,
            )
            .optional()
        })
        .await
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError> {
        let question = question.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question,
                    question.answer,
                    question.category,
                    question.difficulty
                ],
            )?;
            let id = conn.last_insert_rowid();
            Ok(question.into_question(id))
        })
        .await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.with_conn(move |conn| {
            let affected = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
        .await
    }

    async fn count_questions(&self) -> Result<u64, StoreError> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
            Ok(count.max(0) as u64)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::seed::seed_store;

    #[tokio::test]
    async fn insert_and_read_back() {
        let store = SqliteStore::open_in_memory().unwrap();
        let cat = store.insert_category("Geography").await.unwrap();
        let q = store
            .insert_question(&NewQuestion::new(
                "Largest lake in Africa?",
                "Lake Victoria",
                cat.id,
                2,
            ))
            .await
            .unwrap();

        assert_eq!(store.get_question(q.id).await.unwrap(), Some(q.clone()));
        assert_eq!(store.get_category(cat.id).await.unwrap(), Some(cat));
        assert_eq!(store.count_questions().await.unwrap(), 1);
        assert!(store.get_question(q.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = store
            .insert_question(&NewQuestion::new("a", "a", 1, 1))
            .await
            .unwrap();
        let second = store
            .insert_question(&NewQuestion::new("b", "b", 1, 1))
            .await
            .unwrap();
        assert!(store.delete_question(second.id).await.unwrap());
        assert!(!store.delete_question(second.id).await.unwrap());

        let third = store
            .insert_question(&NewQuestion::new("c", "c", 1, 1))
            .await
            .unwrap();
        assert!(third.id > second.id);
        assert!(first.id < second.id);
    }

    #[tokio::test]
    async fn search_ignores_case_and_treats_wildcards_literally() {
        let store = SqliteStore::open_in_memory().unwrap();
        for text in ["What is the TITLE?", "100% correct?", "Who wrote it?"] {
            store
                .insert_question(&NewQuestion::new(text, "x", 1, 1))
                .await
                .unwrap();
        }

        let hits = store.search_questions("title").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "What is the TITLE?");

        let hits = store.search_questions("%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "100% correct?");
    }

    #[tokio::test]
    async fn category_filter_and_ordering() {
        let store = SqliteStore::open_in_memory().unwrap();
        seed_store(&store).await.unwrap();

        let all = store.list_questions().await.unwrap();
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let sports = store.list_questions_by_category(6).await.unwrap();
        assert!(!sports.is_empty());
        assert!(sports.iter().all(|q| q.category == 6));
        assert_eq!(store.list_categories().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trivia.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            seed_store(&store).await.unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.list_categories().await.unwrap().len(), 6);
        assert!(store.count_questions().await.unwrap() > 0);
    }
}

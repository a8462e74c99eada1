//! QuestionStorage and CategoryStorage implementations for SQLite.

use async_trait::async_trait;
use rusqlite::types::Value as SqlValue;
use rusqlite::{OptionalExtension, Row, params, params_from_iter};
use tracing::debug;

use crate::backends::escape_like;
use crate::core::{CategoryStorage, QuestionStorage};
use crate::error::{BackendError, ResourceError, StorageError, StorageResult, ValidationError};
use crate::types::{Category, CategoryFilter, NewQuestion, Page, PageRequest, Question};

use super::SqliteBackend;
use super::backend::UNICODE_LOWER;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

impl SqliteBackend {
    /// Runs a question query and collects the rows.
    fn query_questions<P>(&self, sql: &str, params: P) -> StorageResult<Vec<Question>>
    where
        P: rusqlite::Params,
    {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;
        let rows = stmt
            .query_map(params, row_to_question)
            .map_err(|e| internal_error(format!("Failed to query questions: {}", e)))?;
        let questions = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    fn category_exists(&self, id: i64) -> StorageResult<bool> {
        let conn = self.get_connection()?;
        let found = conn
            .query_row("SELECT 1 FROM categories WHERE id = ?1", params![id], |_| {
                Ok(())
            })
            .optional()?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl QuestionStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self, page: PageRequest) -> StorageResult<Page<Question>> {
        let total = self.count().await?;

        let items = self.query_questions(
            &format!(
                "SELECT {} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2",
                QUESTION_COLUMNS
            ),
            params![page.limit() as i64, page.offset() as i64],
        )?;

        if items.is_empty() {
            return Err(ResourceError::PageOutOfRange {
                page: page.page,
                total,
            }
            .into());
        }

        Ok(Page::new(items, page.page, total))
    }

    async fn create(&self, question: NewQuestion) -> StorageResult<Question> {
        question.validate()?;

        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                question.question,
                question.answer,
                question.category,
                question.difficulty
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert question: {}", e)))?;

        let id = conn.last_insert_rowid();
        debug!(id, category = %question.category, "Inserted question");

        Ok(question.into_question(id))
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Question>> {
        let conn = self.get_connection()?;
        let question = conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
                params![id],
                row_to_question,
            )
            .optional()?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let affected = conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete question: {}", e)))?;

        if affected == 0 {
            return Err(ResourceError::NotFound {
                kind: "question",
                id,
            }
            .into());
        }

        debug!(id, "Deleted question");
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    async fn search(&self, term: &str) -> StorageResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        self.query_questions(
            &format!(
                "SELECT {} FROM questions WHERE {}(question) LIKE ?1 ESCAPE '\\' ORDER BY id",
                QUESTION_COLUMNS, UNICODE_LOWER
            ),
            params![pattern],
        )
    }

    async fn filter_by_category(&self, category_id: i64) -> StorageResult<Vec<Question>> {
        if !self.category_exists(category_id)? {
            return Err(ValidationError::InvalidCategory {
                category: category_id.to_string(),
            }
            .into());
        }

        self.query_questions(
            &format!(
                "SELECT {} FROM questions WHERE category = ?1 ORDER BY id",
                QUESTION_COLUMNS
            ),
            params![category_id.to_string()],
        )
    }

    async fn quiz_pool(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StorageResult<Vec<Question>> {
        let mut sql = format!("SELECT {} FROM questions WHERE 1 = 1", QUESTION_COLUMNS);
        let mut values: Vec<SqlValue> = Vec::new();

        if let Some(category_id) = filter.category_id() {
            sql.push_str(" AND category = ?");
            values.push(SqlValue::Text(category_id.to_string()));
        }

        // One JSON array parameter keeps long histories under the bind limit
        if !exclude.is_empty() {
            let ids = serde_json::to_string(exclude)
                .map_err(|e| internal_error(format!("Failed to encode excluded ids: {}", e)))?;
            sql.push_str(" AND id NOT IN (SELECT value FROM json_each(?))");
            values.push(SqlValue::Text(ids));
        }

        sql.push_str(" ORDER BY id");
        self.query_questions(&sql, params_from_iter(values))
    }
}

#[async_trait]
impl CategoryStorage for SqliteBackend {
    async fn list_all(&self) -> StorageResult<Vec<Category>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)))?;
        let categories = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    async fn get(&self, id: i64) -> StorageResult<Option<Category>> {
        let conn = self.get_connection()?;
        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_backend() -> SqliteBackend {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to initialize schema");
        backend
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let backend = create_backend();

        let first = backend
            .create(NewQuestion::new("What boxer's original name is Cassius Clay?", "Muhammad Ali", "4", 1))
            .await
            .unwrap();
        let second = backend
            .create(NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", "1", 3))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(backend.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_answer() {
        let backend = create_backend();
        let result = backend.create(NewQuestion::new("Question?", "", "1", 1)).await;
        assert!(matches!(
            result,
            Err(StorageError::Validation(ValidationError::MissingRequiredField { .. }))
        ));
        assert_eq!(backend.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_quiz_pool_excludes_ids() {
        let backend = create_backend();
        let mut ids = Vec::new();
        for i in 0..4 {
            let q = backend
                .create(NewQuestion::new(format!("Art question {}", i), "answer", "2", 1))
                .await
                .unwrap();
            ids.push(q.id);
        }
        backend
            .create(NewQuestion::new("Science question", "answer", "1", 1))
            .await
            .unwrap();

        let pool = backend
            .quiz_pool(CategoryFilter::Only(2), &ids[..2])
            .await
            .unwrap();
        let pool_ids: Vec<i64> = pool.iter().map(|q| q.id).collect();
        assert_eq!(pool_ids, ids[2..].to_vec());

        let all = backend.quiz_pool(CategoryFilter::All, &[]).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let backend = create_backend();
        backend
            .create(NewQuestion::new("What is 100% of nothing?", "nothing", "1", 1))
            .await
            .unwrap();
        backend
            .create(NewQuestion::new("What is 1000 of nothing?", "nothing", "1", 1))
            .await
            .unwrap();

        let results = backend.search("100%").await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].question.contains("100%"));
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let backend = create_backend();
        let created = backend
            .create(NewQuestion::new("Wer schrieb ÜBER die Brücke?", "Niemand", "4", 2))
            .await
            .unwrap();
        backend
            .create(NewQuestion::new("Who wrote about the bridge?", "Nobody", "4", 2))
            .await
            .unwrap();

        let results = backend.search("über").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, created.id);

        let results = backend.search("BRÜCKE").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_quiz_pool_long_exclusion_list() {
        let backend = create_backend();
        let kept = backend
            .create(NewQuestion::new("Art question", "answer", "2", 1))
            .await
            .unwrap();
        let seen = backend
            .create(NewQuestion::new("Seen art question", "answer", "2", 1))
            .await
            .unwrap();

        let mut exclude: Vec<i64> = (100_000..140_000).collect();
        exclude.push(seen.id);

        let pool = backend.quiz_pool(CategoryFilter::All, &exclude).await.unwrap();
        let ids: Vec<i64> = pool.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![kept.id]);
    }

    #[tokio::test]
    async fn test_get_category() {
        let backend = create_backend();
        let art = backend.get(2).await.unwrap().unwrap();
        assert_eq!(art.kind, "Art");
        assert!(backend.get(999).await.unwrap().is_none());
    }
}

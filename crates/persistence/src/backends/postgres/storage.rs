//! QuestionStorage and CategoryStorage implementations for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;
use tracing::debug;

use crate::backends::escape_like;
use crate::core::{CategoryStorage, QuestionStorage};
use crate::error::{ResourceError, StorageResult, ValidationError};
use crate::types::{Category, CategoryFilter, NewQuestion, Page, PageRequest, Question};

use super::PostgresBackend;

fn row_to_question(row: &Row) -> Question {
    Question {
        id: row.get(0),
        question: row.get(1),
        answer: row.get(2),
        category: row.get(3),
        difficulty: row.get(4),
    }
}

fn row_to_category(row: &Row) -> Category {
    Category::new(row.get(0), row.get::<_, String>(1))
}

#[async_trait]
impl QuestionStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, page: PageRequest) -> StorageResult<Page<Question>> {
        let total = self.count().await?;

        let client = self.get_client().await?;
        let rows = client
            .query(
                "SELECT id, question, answer, category, difficulty FROM questions
                 ORDER BY id LIMIT $1 OFFSET $2",
                &[&(page.limit() as i64), &(page.offset() as i64)],
            )
            .await?;

        if rows.is_empty() {
            return Err(ResourceError::PageOutOfRange {
                page: page.page,
                total,
            }
            .into());
        }

        let items = rows.iter().map(row_to_question).collect();
        Ok(Page::new(items, page.page, total))
    }

    async fn create(&self, question: NewQuestion) -> StorageResult<Question> {
        question.validate()?;

        let client = self.get_client().await?;
        let row = client
            .query_one(
                "INSERT INTO questions (question, answer, category, difficulty)
                 VALUES ($1, $2, $3, $4) RETURNING id",
                &[
                    &question.question,
                    &question.answer,
                    &question.category,
                    &question.difficulty,
                ],
            )
            .await?;

        let id: i64 = row.get(0);
        debug!(id, category = %question.category, "Inserted question");
        Ok(question.into_question(id))
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Question>> {
        let client = self.get_client().await?;
        let row = client
            .query_opt(
                "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(row.as_ref().map(row_to_question))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let client = self.get_client().await?;
        let affected = client
            .execute("DELETE FROM questions WHERE id = $1", &[&id])
            .await?;

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
        let client = self.get_client().await?;
        let row = client.query_one("SELECT COUNT(*) FROM questions", &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    async fn search(&self, term: &str) -> StorageResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));
        let client = self.get_client().await?;
        let rows = client
            .query(
                "SELECT id, question, answer, category, difficulty FROM questions
                 WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id",
                &[&pattern],
            )
            .await?;
        Ok(rows.iter().map(row_to_question).collect())
    }

    async fn filter_by_category(&self, category_id: i64) -> StorageResult<Vec<Question>> {
        if self.get(category_id).await?.is_none() {
            return Err(ValidationError::InvalidCategory {
                category: category_id.to_string(),
            }
            .into());
        }

        let client = self.get_client().await?;
        let rows = client
            .query(
                "SELECT id, question, answer, category, difficulty FROM questions
                 WHERE category = $1 ORDER BY id",
                &[&category_id.to_string()],
            )
            .await?;
        Ok(rows.iter().map(row_to_question).collect())
    }

    async fn quiz_pool(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StorageResult<Vec<Question>> {
        let category = filter.category_id().map(|id| id.to_string());
        let exclude = exclude.to_vec();

        let client = self.get_client().await?;
        let rows = client
            .query(
                "SELECT id, question, answer, category, difficulty FROM questions
                 WHERE ($1::TEXT IS NULL OR category = $1)
                   AND NOT (id = ANY($2))
                 ORDER BY id",
                &[&category, &exclude],
            )
            .await?;
        Ok(rows.iter().map(row_to_question).collect())
    }
}

#[async_trait]
impl CategoryStorage for PostgresBackend {
    async fn list_all(&self) -> StorageResult<Vec<Category>> {
        let client = self.get_client().await?;
        let rows = client
            .query("SELECT id, type FROM categories ORDER BY id", &[])
            .await?;
        Ok(rows.iter().map(row_to_category).collect())
    }

    async fn get(&self, id: i64) -> StorageResult<Option<Category>> {
        let client = self.get_client().await?;
        let row = client
            .query_opt("SELECT id, type FROM categories WHERE id = $1", &[&id])
            .await?;
        Ok(row.as_ref().map(row_to_category))
    }
}

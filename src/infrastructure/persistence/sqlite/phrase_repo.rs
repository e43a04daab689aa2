//! SQLite Phrase Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{PhraseRecord, PhraseRepositoryPort, RepositoryError};

/// SQLite Phrase Repository
pub struct SqlitePhraseRepository {
    pool: DbPool,
}

impl SqlitePhraseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PhraseRow {
    id: i64,
    text: String,
    created_at: String,
}

impl TryFrom<PhraseRow> for PhraseRecord {
    type Error = RepositoryError;

    fn try_from(row: PhraseRow) -> Result<Self, Self::Error> {
        Ok(PhraseRecord {
            id: row.id,
            text: row.text,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PhraseRepositoryPort for SqlitePhraseRepository {
    async fn insert(&self, text: &str) -> Result<PhraseRecord, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO phrases (text, created_at) VALUES (?, ?)")
            .bind(text)
            .bind(created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(PhraseRecord {
            id: result.last_insert_rowid(),
            text: text.to_string(),
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PhraseRecord>, RepositoryError> {
        let row: Option<PhraseRow> =
            sqlx::query_as("SELECT id, text, created_at FROM phrases WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(PhraseRecord::try_from).transpose()
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<PhraseRecord>, RepositoryError> {
        let row: Option<PhraseRow> =
            sqlx::query_as("SELECT id, text, created_at FROM phrases WHERE text = ? LIMIT 1")
                .bind(text)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(PhraseRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<PhraseRecord>, RepositoryError> {
        let rows: Vec<PhraseRow> =
            sqlx::query_as("SELECT id, text, created_at FROM phrases ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PhraseRecord::try_from).collect()
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM phrases WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn test_repo() -> SqlitePhraseRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqlitePhraseRepository::new(pool)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = test_repo().await;

        let phrase = repo.insert("mate").await.unwrap();
        assert!(phrase.id > 0);
        assert_eq!(phrase.text, "mate");

        let found = repo.find_by_id(phrase.id).await.unwrap().unwrap();
        assert_eq!(found.text, "mate");

        let by_text = repo.find_by_text("mate").await.unwrap().unwrap();
        assert_eq!(by_text.id, phrase.id);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = test_repo().await;
        assert!(repo.find_by_id(999).await.unwrap().is_none());
        assert!(repo.find_by_text("asado").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = test_repo().await;
        repo.insert("mate").await.unwrap();
        repo.insert("asado").await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text, "mate");
        assert_eq!(all[1].text, "asado");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = test_repo().await;
        let phrase = repo.insert("che").await.unwrap();

        repo.delete(phrase.id).await.unwrap();
        assert!(repo.find_by_id(phrase.id).await.unwrap().is_none());
    }
}

//! SQLite Generated Text Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    GeneratedTextRecord, NewGeneratedText, RepositoryError, TextRepositoryPort,
};

/// SQLite Generated Text Repository
pub struct SqliteTextRepository {
    pool: DbPool,
}

impl SqliteTextRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TextRow {
    id: i64,
    passage: String,
    translation: Option<String>,
    vocabulary_usage: Option<String>,
    audio_file_id: Option<String>,
    created_at: String,
}

impl TryFrom<TextRow> for GeneratedTextRecord {
    type Error = RepositoryError;

    fn try_from(row: TextRow) -> Result<Self, Self::Error> {
        Ok(GeneratedTextRecord {
            id: row.id,
            passage: row.passage,
            translation: row.translation,
            vocabulary_usage: row.vocabulary_usage,
            audio_file_id: row.audio_file_id,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, passage, translation, vocabulary_usage, audio_file_id, created_at FROM texts";

#[async_trait]
impl TextRepositoryPort for SqliteTextRepository {
    async fn insert(
        &self,
        text: &NewGeneratedText,
    ) -> Result<GeneratedTextRecord, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO texts (passage, translation, vocabulary_usage, audio_file_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&text.passage)
        .bind(&text.translation)
        .bind(&text.vocabulary_usage)
        .bind(&text.audio_file_id)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(GeneratedTextRecord {
            id: result.last_insert_rowid(),
            passage: text.passage.clone(),
            translation: text.translation.clone(),
            vocabulary_usage: text.vocabulary_usage.clone(),
            audio_file_id: text.audio_file_id.clone(),
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GeneratedTextRecord>, RepositoryError> {
        let row: Option<TextRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(GeneratedTextRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<GeneratedTextRecord>, RepositoryError> {
        // 最新的在前
        let rows: Vec<TextRow> = sqlx::query_as(&format!("{} ORDER BY id DESC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(GeneratedTextRecord::try_from).collect()
    }
}

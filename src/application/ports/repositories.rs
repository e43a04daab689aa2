//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Phrase Repository
// ============================================================================

/// 词汇短语实体（用于持久化）
#[derive(Debug, Clone)]
pub struct PhraseRecord {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Phrase Repository Port
///
/// 短语只增只删，不支持修改。
/// 去重是尽力而为的先查后插：并发写入同一文本可能同时成功（接受的竞态）。
#[async_trait]
pub trait PhraseRepositoryPort: Send + Sync {
    /// 插入短语，返回带生成 ID 的记录
    async fn insert(&self, text: &str) -> Result<PhraseRecord, RepositoryError>;

    /// 根据 ID 查找短语
    async fn find_by_id(&self, id: i64) -> Result<Option<PhraseRecord>, RepositoryError>;

    /// 根据文本精确查找短语（用于去重预检）
    async fn find_by_text(&self, text: &str) -> Result<Option<PhraseRecord>, RepositoryError>;

    /// 获取所有短语
    async fn find_all(&self) -> Result<Vec<PhraseRecord>, RepositoryError>;

    /// 删除短语
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

// ============================================================================
// Generated Text Repository
// ============================================================================

/// 待插入的生成文本
#[derive(Debug, Clone)]
pub struct NewGeneratedText {
    /// 生成的西班牙语正文
    pub passage: String,
    /// 英语翻译
    pub translation: Option<String>,
    /// 词汇用法说明
    pub vocabulary_usage: Option<String>,
    /// 关联音频的媒体标识符（文件名）
    pub audio_file_id: Option<String>,
}

/// 生成文本实体（用于持久化）
///
/// 每次成功（或部分成功）的生成工作流恰好创建一条，创建后不再修改
#[derive(Debug, Clone)]
pub struct GeneratedTextRecord {
    pub id: i64,
    pub passage: String,
    pub translation: Option<String>,
    pub vocabulary_usage: Option<String>,
    pub audio_file_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Generated Text Repository Port
#[async_trait]
pub trait TextRepositoryPort: Send + Sync {
    /// 插入生成文本，返回带生成 ID 的记录
    async fn insert(&self, text: &NewGeneratedText) -> Result<GeneratedTextRecord, RepositoryError>;

    /// 根据 ID 查找生成文本
    async fn find_by_id(&self, id: i64) -> Result<Option<GeneratedTextRecord>, RepositoryError>;

    /// 获取所有生成文本（最新的在前）
    async fn find_all(&self) -> Result<Vec<GeneratedTextRecord>, RepositoryError>;
}

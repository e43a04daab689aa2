//! Text Generator Port - 文本生成抽象
//!
//! 定义外部文本生成服务的抽象接口，具体实现在 infrastructure/adapters 层。
//! 返回值是领域层解析后的回复（带完整程度标记），
//! 调用方负责决定 Partial / Unparseable 的处理策略。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ParsedReply;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum TextGenError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Text Generator Port
///
/// 外部文本生成服务的抽象接口
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 根据词汇表生成练习文本
    ///
    /// `vocabulary` 非空；生成的正文必须包含每个词条。
    /// 服务调用失败返回 Err；调用成功但回复不含可用正文时，
    /// 返回 outcome 为 `Unparseable` 的 `ParsedReply`。
    async fn generate(&self, vocabulary: &[String]) -> Result<ParsedReply, TextGenError>;
}

//! Speech Synthesizer Port - 语音合成抽象
//!
//! 定义外部语音合成服务的抽象接口，具体实现在 infrastructure/adapters 层。
//! 合成失败对调用方永远是非致命的：工作流捕获错误并降级为"无音频"。

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    /// 凭证缺失，合成能力不可用（启动时已告警）
    #[error("Synthesizer not configured: {0}")]
    NotConfigured(String),

    #[error("Cannot synthesize empty text")]
    EmptyText,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// Speech Synthesizer Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 为给定文本合成语音
    ///
    /// `text` 为空时返回 `SpeechError::EmptyText`
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError>;
}

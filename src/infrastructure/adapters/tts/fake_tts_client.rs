//! Fake TTS Client - 用于测试的语音合成客户端
//!
//! 始终返回固定的音频数据，不实际调用合成服务

use async_trait::async_trait;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort, SynthesizedAudio};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: vec![0u8; 1024],
        }
    }
}

/// Fake TTS Client
///
/// 用于测试，始终返回配置的固定音频数据
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
}

impl FakeTtsClient {
    /// 创建新的 FakeTtsClient
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        tracing::debug!(text_len = text.len(), "FakeTtsClient: returning fixed audio");

        // 模拟合成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

        Ok(SynthesizedAudio {
            audio_data: self.config.audio_data.clone(),
        })
    }
}

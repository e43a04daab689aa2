//! ElevenLabs Client - 调用 ElevenLabs 语音合成服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Headers: xi-api-key
//! Request: {"text": "...", "model_id": "..."}  (JSON)
//! Response: audio/mpeg binary (chunked)
//!
//! 凭证缺失是软错误：客户端照常构造，每次合成返回 NotConfigured，
//! 由调用方降级为"无音频"。

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort, SynthesizedAudio};

/// API Key 环境变量名
const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    /// 要合成的文本
    text: &'a str,
    /// 模型 ID
    model_id: &'a str,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 固定音色 ID
    pub voice_id: String,
    /// 模型 ID
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            voice_id: "ukupJ4zdf9bo1Py6MiO6".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            timeout_secs: 120,
        }
    }
}

/// ElevenLabs 客户端
pub struct ElevenLabsClient {
    client: Client,
    /// None 表示凭证缺失，合成调用将返回 NotConfigured
    api_key: Option<String>,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    /// 创建新的 ElevenLabs 客户端
    pub fn new(
        api_key: Option<String>,
        config: ElevenLabsClientConfig,
    ) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        if api_key.is_none() {
            tracing::warn!(
                "{} is not set, speech synthesis is disabled (texts will be persisted without audio)",
                API_KEY_ENV
            );
        }

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// 从环境变量读取凭证创建客户端
    ///
    /// 凭证缺失不报错，客户端以降级模式构造
    pub fn from_env(config: ElevenLabsClientConfig) -> Result<Self, SpeechError> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::new(api_key, config)
    }

    /// 合成能力是否可用
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// 获取合成 URL
    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url, self.config.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesizerPort for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| SpeechError::NotConfigured(format!("{} is not set", API_KEY_ENV)))?;

        let request = SynthesisRequest {
            text,
            model_id: &self.config.model_id,
        };

        tracing::debug!(
            voice_id = %self.config.voice_id,
            model_id = %self.config.model_id,
            text_len = text.len(),
            "Sending speech synthesis request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .header("xi-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!(
                        "Cannot connect to synthesis service: {}",
                        e
                    ))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 分块读取响应流，累积到内存缓冲
        let mut audio_data = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?;
            audio_data.extend_from_slice(&chunk);
        }

        tracing::info!(audio_size = audio_data.len(), "Speech synthesis completed");

        Ok(SynthesizedAudio { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ElevenLabsClientConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.model_id, "eleven_multilingual_v2");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_synthesis_url() {
        let mut config = ElevenLabsClientConfig::default();
        config.voice_id = "abc".to_string();
        let client = ElevenLabsClient::new(Some("key".to_string()), config).unwrap();
        assert_eq!(
            client.synthesis_url(),
            "https://api.elevenlabs.io/v1/text-to-speech/abc"
        );
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let client =
            ElevenLabsClient::new(Some("key".to_string()), ElevenLabsClientConfig::default())
                .unwrap();
        assert!(matches!(
            client.synthesize("").await,
            Err(SpeechError::EmptyText)
        ));
    }

    #[tokio::test]
    async fn test_missing_credentials_is_not_configured() {
        let client = ElevenLabsClient::new(None, ElevenLabsClientConfig::default()).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.synthesize("hola").await,
            Err(SpeechError::NotConfigured(_))
        ));
    }
}

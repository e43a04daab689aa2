//! Fake LLM Client - 用于测试的文本生成客户端
//!
//! 始终返回固定的回复文本，不实际调用外部服务

use async_trait::async_trait;

use crate::application::ports::{TextGenError, TextGeneratorPort};
use crate::domain::{parse_reply, ParsedReply};

/// Fake LLM Client 配置
#[derive(Debug, Clone)]
pub struct FakeLlmClientConfig {
    /// 固定返回的原始回复（按三段标记格式）
    pub raw_reply: String,
}

impl Default for FakeLlmClientConfig {
    fn default() -> Self {
        Self {
            raw_reply: "\
[SPANISH TEXT]
Che, hoy tomamos unos mates en la plaza.

[ENGLISH TRANSLATION]
Hey, today we drank some mates in the square.

[VOCABULARY USAGE]
- mate: shared drink in the square
"
            .to_string(),
        }
    }
}

/// Fake LLM Client
///
/// 用于测试，始终返回配置的固定回复
pub struct FakeLlmClient {
    config: FakeLlmClientConfig,
}

impl FakeLlmClient {
    /// 创建新的 FakeLlmClient
    pub fn new(config: FakeLlmClientConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeLlmClientConfig::default())
    }
}

#[async_trait]
impl TextGeneratorPort for FakeLlmClient {
    async fn generate(&self, vocabulary: &[String]) -> Result<ParsedReply, TextGenError> {
        tracing::debug!(
            vocabulary_count = vocabulary.len(),
            "FakeLlmClient: returning fixed reply"
        );

        // 模拟生成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

        Ok(parse_reply(&self.config.raw_reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReplyOutcome;

    #[tokio::test]
    async fn test_returns_parsed_default_reply() {
        let client = FakeLlmClient::with_defaults();
        let parsed = client.generate(&["mate".to_string()]).await.unwrap();
        assert_eq!(parsed.outcome, ReplyOutcome::Complete);
        assert!(parsed.passage.contains("mates"));
    }
}

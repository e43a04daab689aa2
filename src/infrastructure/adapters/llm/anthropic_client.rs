//! Anthropic Client - 调用 Anthropic Messages API 生成练习文本
//!
//! 实现 TextGeneratorPort trait
//!
//! 外部 API:
//! POST https://api.anthropic.com/v1/messages
//! Headers: x-api-key, anthropic-version
//! Request: {"model": "...", "max_tokens": ..., "system": "...", "messages": [...]}
//! Response: {"content": [{"type": "text", "text": "..."}], ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{TextGenError, TextGeneratorPort};
use crate::domain::{parse_reply, ParsedReply};

/// API Key 环境变量名
const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Messages API 版本头
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// 固定系统指令：阿根廷西班牙语（vos 变位），必须使用全部词汇，
/// 输出严格遵循三段标记格式（与领域解析器约定一致）
const SYSTEM_PROMPT: &str = "\
You are an AI assistant helping a Russian person living in Argentina learn Spanish. They are fluent in English.
Generate a short, cohesive story or conversational text in Argentinian Spanish (using 'vos' conjugation, local slang where appropriate and natural).
The text MUST incorporate the vocabulary words/phrases provided by the user.
After the Spanish text, provide an English translation of the generated Spanish text.

Format the output strictly as follows:

[SPANISH TEXT]
{Generated Spanish text here}

[ENGLISH TRANSLATION]
{English translation here}

[VOCABULARY USAGE]
{List each vocabulary word/phrase and how it was used in the text}
";

/// Messages API 请求体
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Messages API 响应体（只取需要的字段）
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Anthropic 客户端配置
#[derive(Debug, Clone)]
pub struct AnthropicClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 模型 ID
    pub model: String,
    /// 单次回复的最大 token 数
    pub max_tokens: u32,
    /// 采样温度
    pub temperature: f32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for AnthropicClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-opus-20240229".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

/// Anthropic 客户端
///
/// 通过 HTTP 调用 Anthropic Messages API
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    config: AnthropicClientConfig,
}

impl AnthropicClient {
    /// 创建新的 Anthropic 客户端
    pub fn new(
        api_key: impl Into<String>,
        config: AnthropicClientConfig,
    ) -> Result<Self, TextGenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TextGenError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// 从环境变量读取凭证创建客户端
    ///
    /// `ANTHROPIC_API_KEY` 缺失是启动硬错误
    pub fn from_env(config: AnthropicClientConfig) -> Result<Self, TextGenError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            TextGenError::MissingCredentials(format!("{} is not set", API_KEY_ENV))
        })?;
        Self::new(api_key, config)
    }

    /// 获取 Messages API URL
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }
}

/// 构建列出词汇的用户指令
fn build_user_prompt(vocabulary: &[String]) -> String {
    let vocab_str = vocabulary
        .iter()
        .map(|word| format!("- {}", word))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Please generate a text using these vocabulary words/phrases:\n\n{}\n\nRemember to use Argentinian Spanish with 'vos' conjugation and local expressions where appropriate.",
        vocab_str
    )
}

/// 从响应中取第一个文本块
fn extract_text(response: MessagesResponse) -> Result<String, TextGenError> {
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .map(|block| block.text)
        .ok_or_else(|| TextGenError::InvalidResponse("no text content block".to_string()))
}

#[async_trait]
impl TextGeneratorPort for AnthropicClient {
    async fn generate(&self, vocabulary: &[String]) -> Result<ParsedReply, TextGenError> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: build_user_prompt(vocabulary),
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            vocabulary_count = vocabulary.len(),
            "Sending text generation request"
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TextGenError::Timeout
                } else if e.is_connect() {
                    TextGenError::NetworkError(format!(
                        "Cannot connect to text generation service: {}",
                        e
                    ))
                } else {
                    TextGenError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TextGenError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| TextGenError::InvalidResponse(e.to_string()))?;

        let raw = extract_text(body)?;
        let parsed = parse_reply(&raw);

        tracing::info!(
            outcome = ?parsed.outcome,
            passage_len = parsed.passage.len(),
            "Text generation completed"
        );

        Ok(parsed)
    }
}

//! LLM Adapter - 文本生成客户端实现

mod anthropic_client;
mod fake_llm_client;

pub use anthropic_client::{AnthropicClient, AnthropicClientConfig};
pub use fake_llm_client::{FakeLlmClient, FakeLlmClientConfig};

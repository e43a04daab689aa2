//! Usuaya - 西班牙语学习辅助后端
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - LLM 回复解析器（分段标记解析）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextGenerator, SpeechSynthesizer, MediaStore, Repositories）
//! - Commands: CQRS 命令处理器（生成工作流在此编排）
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Adapters: Anthropic 文本生成、ElevenLabs 语音合成、文件媒体存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

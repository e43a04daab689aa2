//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextGenerator、SpeechSynthesizer、MediaStore、Repositories）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Handlers
    handlers::{CreatePhraseHandler, DeletePhraseHandler, GenerateTextHandler},
    // Phrase commands
    CreatePhrase,
    DeletePhrase,
    // Text commands
    GenerateText,
};

pub use error::ApplicationError;

pub use ports::{
    // Repositories
    GeneratedTextRecord,
    // Media store
    MediaStoreError,
    MediaStorePort,
    NewGeneratedText,
    PhraseRecord,
    PhraseRepositoryPort,
    RepositoryError,
    // Speech synthesizer
    SpeechError,
    SpeechSynthesizerPort,
    SynthesizedAudio,
    // Text generator
    TextGenError,
    TextGeneratorPort,
    TextRepositoryPort,
};

pub use queries::{
    // Handlers
    handlers::{GetAudioHandler, GetTextHandler, ListPhrasesHandler, ListTextsHandler},
    // Audio queries
    GetAudio,
    GetAudioResponse,
    // Text queries
    GetText,
    // Phrase queries
    ListPhrases,
    ListTexts,
};

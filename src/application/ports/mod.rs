//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod media_store;
mod repositories;
mod speech;
mod text_generator;

pub use media_store::{MediaStoreError, MediaStorePort};
pub use repositories::{
    GeneratedTextRecord, NewGeneratedText, PhraseRecord, PhraseRepositoryPort, RepositoryError,
    TextRepositoryPort,
};
pub use speech::{SpeechError, SpeechSynthesizerPort, SynthesizedAudio};
pub use text_generator::{TextGenError, TextGeneratorPort};

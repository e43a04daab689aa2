//! CQRS Queries - 查询及处理器

mod audio_queries;
pub mod handlers;
mod phrase_queries;
mod text_queries;

pub use audio_queries::{GetAudio, GetAudioResponse};
pub use phrase_queries::ListPhrases;
pub use text_queries::{GetText, ListTexts};

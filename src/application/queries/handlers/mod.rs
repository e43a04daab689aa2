//! Query Handlers

mod audio_handlers;
mod phrase_handlers;
mod text_handlers;

pub use audio_handlers::GetAudioHandler;
pub use phrase_handlers::ListPhrasesHandler;
pub use text_handlers::{GetTextHandler, ListTextsHandler};

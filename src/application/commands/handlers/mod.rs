//! Command Handlers

mod phrase_handlers;
mod text_handlers;

pub use phrase_handlers::{CreatePhraseHandler, DeletePhraseHandler};
pub use text_handlers::GenerateTextHandler;

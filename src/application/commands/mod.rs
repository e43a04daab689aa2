//! CQRS Commands - 命令及处理器

pub mod handlers;
mod phrase_commands;
mod text_commands;

pub use phrase_commands::{CreatePhrase, DeletePhrase};
pub use text_commands::GenerateText;

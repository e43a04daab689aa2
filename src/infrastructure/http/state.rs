//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePhraseHandler,
    DeletePhraseHandler,
    GenerateTextHandler,
    // Query handlers
    GetAudioHandler,
    GetTextHandler,
    ListPhrasesHandler,
    ListTextsHandler,
    // Ports
    MediaStorePort,
    PhraseRepositoryPort,
    SpeechSynthesizerPort,
    TextGeneratorPort,
    TextRepositoryPort,
};

/// 应用状态
///
/// 所有出站依赖以显式端口句柄传入，不存在进程级可变状态
pub struct AppState {
    // ========== Ports ==========
    pub phrase_repo: Arc<dyn PhraseRepositoryPort>,
    pub text_repo: Arc<dyn TextRepositoryPort>,
    pub media_store: Arc<dyn MediaStorePort>,
    pub text_generator: Arc<dyn TextGeneratorPort>,
    pub synthesizer: Arc<dyn SpeechSynthesizerPort>,

    // ========== Command Handlers ==========
    pub create_phrase_handler: CreatePhraseHandler,
    pub delete_phrase_handler: DeletePhraseHandler,
    pub generate_text_handler: GenerateTextHandler,

    // ========== Query Handlers ==========
    pub list_phrases_handler: ListPhrasesHandler,
    pub get_text_handler: GetTextHandler,
    pub list_texts_handler: ListTextsHandler,
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        phrase_repo: Arc<dyn PhraseRepositoryPort>,
        text_repo: Arc<dyn TextRepositoryPort>,
        media_store: Arc<dyn MediaStorePort>,
        text_generator: Arc<dyn TextGeneratorPort>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            // Ports
            phrase_repo: phrase_repo.clone(),
            text_repo: text_repo.clone(),
            media_store: media_store.clone(),
            text_generator: text_generator.clone(),
            synthesizer: synthesizer.clone(),

            // Command handlers
            create_phrase_handler: CreatePhraseHandler::new(phrase_repo.clone()),
            delete_phrase_handler: DeletePhraseHandler::new(phrase_repo.clone()),
            generate_text_handler: GenerateTextHandler::new(
                text_generator.clone(),
                synthesizer.clone(),
                media_store.clone(),
                text_repo.clone(),
            ),

            // Query handlers
            list_phrases_handler: ListPhrasesHandler::new(phrase_repo.clone()),
            get_text_handler: GetTextHandler::new(text_repo.clone()),
            list_texts_handler: ListTextsHandler::new(text_repo.clone()),
            get_audio_handler: GetAudioHandler::new(media_store.clone()),
        }
    }
}

//! Phrase Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreatePhrase, DeletePhrase};
use crate::application::error::ApplicationError;
use crate::application::ports::{PhraseRecord, PhraseRepositoryPort};

/// CreatePhrase Handler
///
/// 去重是先查后插的尽力而为检查：文本已存在时返回已有记录而不是报错。
/// 两个并发的相同插入可能都成功（接受的竞态，见 repository 端口说明）。
pub struct CreatePhraseHandler {
    phrase_repo: Arc<dyn PhraseRepositoryPort>,
}

impl CreatePhraseHandler {
    pub fn new(phrase_repo: Arc<dyn PhraseRepositoryPort>) -> Self {
        Self { phrase_repo }
    }

    pub async fn handle(&self, command: CreatePhrase) -> Result<PhraseRecord, ApplicationError> {
        let text = command.text.trim();
        if text.is_empty() {
            return Err(ApplicationError::validation("Phrase text cannot be empty"));
        }

        if let Some(existing) = self.phrase_repo.find_by_text(text).await? {
            tracing::debug!(phrase_id = existing.id, "Phrase already exists, returning it");
            return Ok(existing);
        }

        let phrase = self.phrase_repo.insert(text).await?;

        tracing::info!(phrase_id = phrase.id, text = %phrase.text, "Phrase created");

        Ok(phrase)
    }
}

/// DeletePhrase Handler
pub struct DeletePhraseHandler {
    phrase_repo: Arc<dyn PhraseRepositoryPort>,
}

impl DeletePhraseHandler {
    pub fn new(phrase_repo: Arc<dyn PhraseRepositoryPort>) -> Self {
        Self { phrase_repo }
    }

    pub async fn handle(&self, command: DeletePhrase) -> Result<(), ApplicationError> {
        let phrase = self
            .phrase_repo
            .find_by_id(command.phrase_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Phrase", command.phrase_id))?;

        self.phrase_repo.delete(phrase.id).await?;

        tracing::info!(phrase_id = phrase.id, text = %phrase.text, "Phrase deleted");

        Ok(())
    }
}

//! Phrase Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PhraseRecord, PhraseRepositoryPort};
use crate::application::queries::ListPhrases;

/// ListPhrases Handler
pub struct ListPhrasesHandler {
    phrase_repo: Arc<dyn PhraseRepositoryPort>,
}

impl ListPhrasesHandler {
    pub fn new(phrase_repo: Arc<dyn PhraseRepositoryPort>) -> Self {
        Self { phrase_repo }
    }

    pub async fn handle(&self, _query: ListPhrases) -> Result<Vec<PhraseRecord>, ApplicationError> {
        Ok(self.phrase_repo.find_all().await?)
    }
}

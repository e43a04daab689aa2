//! Text Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{GeneratedTextRecord, TextRepositoryPort};
use crate::application::queries::{GetText, ListTexts};

/// GetText Handler
pub struct GetTextHandler {
    text_repo: Arc<dyn TextRepositoryPort>,
}

impl GetTextHandler {
    pub fn new(text_repo: Arc<dyn TextRepositoryPort>) -> Self {
        Self { text_repo }
    }

    pub async fn handle(&self, query: GetText) -> Result<GeneratedTextRecord, ApplicationError> {
        self.text_repo
            .find_by_id(query.text_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Text", query.text_id))
    }
}

/// ListTexts Handler
pub struct ListTextsHandler {
    text_repo: Arc<dyn TextRepositoryPort>,
}

impl ListTextsHandler {
    pub fn new(text_repo: Arc<dyn TextRepositoryPort>) -> Self {
        Self { text_repo }
    }

    pub async fn handle(
        &self,
        _query: ListTexts,
    ) -> Result<Vec<GeneratedTextRecord>, ApplicationError> {
        Ok(self.text_repo.find_all().await?)
    }
}

//! Phrase HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{CreatePhrase, DeletePhrase, ListPhrases, PhraseRecord};
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePhraseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PhraseResponse {
    pub id: i64,
    pub text: String,
    pub created_at: String,
}

impl From<PhraseRecord> for PhraseResponse {
    fn from(record: PhraseRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 列出所有词汇短语
pub async fn list_phrases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PhraseResponse>>>, ApiError> {
    let result = state.list_phrases_handler.handle(ListPhrases).await?;

    let responses: Vec<PhraseResponse> = result.into_iter().map(PhraseResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 创建词汇短语
///
/// 文本已存在时返回已有记录而不是报错
pub async fn create_phrase(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePhraseRequest>,
) -> Result<Json<ApiResponse<PhraseResponse>>, ApiError> {
    let command = CreatePhrase { text: req.text };

    let result = state.create_phrase_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(PhraseResponse::from(result))))
}

/// 删除词汇短语
pub async fn delete_phrase(
    State(state): State<Arc<AppState>>,
    Path(phrase_id): Path<i64>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeletePhrase { phrase_id };

    state.delete_phrase_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

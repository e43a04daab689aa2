//! Text HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GenerateText, GeneratedTextRecord, GetText, ListTexts};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateTextRequest {
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub id: i64,
    pub passage: String,
    pub translation: Option<String>,
    pub vocabulary_usage: Option<String>,
    /// 可通过 /audio/:file_id 回放的媒体标识符
    pub audio_file_id: Option<String>,
    pub created_at: String,
}

impl From<GeneratedTextRecord> for TextResponse {
    fn from(record: GeneratedTextRecord) -> Self {
        Self {
            id: record.id,
            passage: record.passage,
            translation: record.translation,
            vocabulary_usage: record.vocabulary_usage,
            audio_file_id: record.audio_file_id,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 触发生成工作流
///
/// 同步执行：文本生成 → 语音合成 → 媒体落盘 → 持久化，
/// 返回持久化的记录（音频可能缺失）
pub async fn create_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateTextRequest>,
) -> Result<Json<ApiResponse<TextResponse>>, ApiError> {
    let command = GenerateText {
        vocabulary: req.vocabulary,
    };

    let result = state.generate_text_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(TextResponse::from(result))))
}

/// 列出生成文本（最新的在前）
pub async fn list_texts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TextResponse>>>, ApiError> {
    let result = state.list_texts_handler.handle(ListTexts).await?;

    let responses: Vec<TextResponse> = result.into_iter().map(TextResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 获取生成文本详情
pub async fn get_text(
    State(state): State<Arc<AppState>>,
    Path(text_id): Path<i64>,
) -> Result<Json<ApiResponse<TextResponse>>, ApiError> {
    let query = GetText { text_id };

    let result = state.get_text_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(TextResponse::from(result))))
}

//! Audio HTTP Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GetAudio;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 按标识符回放存储的音频文件
///
/// Content-Type 按文件扩展名推断，文件内容以流式返回
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Response, ApiError> {
    let query = GetAudio {
        file_id: file_id.clone(),
    };

    let result = state.get_audio_handler.handle(query).await?;

    let file = tokio::fs::File::open(&result.path)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to open audio file: {}", e)))?;

    let content_length = file
        .metadata()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to stat audio file: {}", e)))?
        .len();

    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, content_length)
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", file_id),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

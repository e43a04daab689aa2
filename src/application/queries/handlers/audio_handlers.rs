//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MediaStorePort;
use crate::application::queries::{GetAudio, GetAudioResponse};

/// GetAudio Handler - 定位存储的音频文件
pub struct GetAudioHandler {
    media_store: Arc<dyn MediaStorePort>,
}

impl GetAudioHandler {
    pub fn new(media_store: Arc<dyn MediaStorePort>) -> Self {
        Self { media_store }
    }

    pub async fn handle(&self, query: GetAudio) -> Result<GetAudioResponse, ApplicationError> {
        let path = self
            .media_store
            .resolve(&query.file_id)
            .await
            .ok_or_else(|| ApplicationError::not_found_str("Audio", query.file_id.clone()))?;

        Ok(GetAudioResponse {
            content_type: content_type_for(&query.file_id),
            path,
        })
    }
}

/// 按文件扩展名推断 Content-Type
///
/// 识别 mp3 / wav / ogg，其余返回通用二进制类型
pub fn content_type_for(file_id: &str) -> &'static str {
    let ext = file_id.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

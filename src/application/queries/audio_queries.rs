//! Audio Queries

use std::path::PathBuf;

/// 获取音频文件查询
#[derive(Debug, Clone)]
pub struct GetAudio {
    /// 媒体标识符（带扩展名的文件名）
    pub file_id: String,
}

/// 音频定位结果
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    /// 磁盘上的文件路径
    pub path: PathBuf,
    /// 按扩展名推断的 Content-Type
    pub content_type: &'static str,
}

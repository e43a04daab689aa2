//! File Media Store - 文件系统媒体存储实现
//!
//! 实现 MediaStorePort trait。
//! 文件名 = 随机 UUID + 原始文件名的扩展名，即对外的不透明标识符。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use uuid::Uuid;

use crate::application::ports::{MediaStoreError, MediaStorePort};

/// 原始文件名无扩展名时使用的默认扩展名
const DEFAULT_EXTENSION: &str = ".mp3";

/// 分块写入的块大小（1MB），内存占用与负载大小无关
const CHUNK_SIZE: usize = 1024 * 1024;

/// 文件系统媒体存储
pub struct FileMediaStore {
    /// 存储根目录
    media_dir: PathBuf,
}

impl FileMediaStore {
    /// 创建新的文件媒体存储，确保目录存在（幂等）
    pub async fn new(media_dir: impl AsRef<Path>) -> Result<Self, MediaStoreError> {
        let media_dir = media_dir.as_ref().to_path_buf();

        fs::create_dir_all(&media_dir)
            .await
            .map_err(|e| MediaStoreError::IoError(e.to_string()))?;

        Ok(Self { media_dir })
    }

    /// 获取存储根目录
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// 分块写入负载
    async fn write_chunked(
        path: &Path,
        payload: &mut (dyn AsyncRead + Send + Unpin),
    ) -> std::io::Result<()> {
        let mut file = fs::File::create(path).await?;
        let mut buf = vec![0u8; CHUNK_SIZE];

        loop {
            let n = payload.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n]).await?;
        }

        file.flush().await?;
        Ok(())
    }
}

/// 从原始文件名提取扩展名（含点，小写），无扩展名时用默认值
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

#[async_trait]
impl MediaStorePort for FileMediaStore {
    async fn save(
        &self,
        payload: &mut (dyn AsyncRead + Send + Unpin),
        original_name: &str,
    ) -> Result<String, MediaStoreError> {
        let filename = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
        let path = self.media_dir.join(&filename);

        if let Err(e) = Self::write_chunked(&path, payload).await {
            // 尽力清理半写文件，清理失败不升级
            let _ = fs::remove_file(&path).await;
            return Err(MediaStoreError::IoError(e.to_string()));
        }

        tracing::debug!(file_id = %filename, "Saved media file");

        Ok(filename)
    }

    async fn resolve(&self, id: &str) -> Option<PathBuf> {
        // 标识符必须恰好是媒体目录的直接子文件名
        if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
            return None;
        }

        let path = self.media_dir.join(id);
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(path),
            _ => {
                tracing::debug!(file_id = %id, "Media file not found");
                None
            }
        }
    }
}

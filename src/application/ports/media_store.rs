//! Media Store Port - 媒体文件存储抽象
//!
//! 二进制媒体负载的落盘与定位。标识符是带扩展名的生成文件名，
//! 对调用方不透明，一经生成不可变。

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tokio::io::AsyncRead;

/// 媒体存储错误
#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Media Store Port
#[async_trait]
pub trait MediaStorePort: Send + Sync {
    /// 保存媒体负载，返回生成的唯一标识符（文件名）
    ///
    /// 扩展名取自 `original_name` 的后缀（无后缀时使用默认扩展名），
    /// 负载按固定大小分块写入，内存占用与负载大小无关。
    /// 写入失败时尽力清理半写文件（清理失败不升级）。
    async fn save(
        &self,
        payload: &mut (dyn AsyncRead + Send + Unpin),
        original_name: &str,
    ) -> Result<String, MediaStoreError>;

    /// 根据标识符定位文件
    ///
    /// 标识符对应的文件直接存在于媒体目录下时返回路径，
    /// 否则返回 None（预期结果，不是错误）。
    async fn resolve(&self, id: &str) -> Option<PathBuf>;
}

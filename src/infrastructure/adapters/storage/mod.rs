//! Storage Adapter - 文件系统媒体存储实现

mod media_store;

pub use media_store::*;

//! Text Commands

/// 生成练习文本命令
///
/// `vocabulary` 是本次请求的运行时输入，不与短语表建立外键关联
#[derive(Debug, Clone)]
pub struct GenerateText {
    pub vocabulary: Vec<String>,
}

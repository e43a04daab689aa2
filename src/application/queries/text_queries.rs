//! Text Queries

/// 获取生成文本详情查询
#[derive(Debug, Clone)]
pub struct GetText {
    pub text_id: i64,
}

/// 列出所有生成文本查询（最新的在前）
#[derive(Debug, Clone)]
pub struct ListTexts;

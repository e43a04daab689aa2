//! Phrase Commands

/// 创建词汇短语命令
#[derive(Debug, Clone)]
pub struct CreatePhrase {
    pub text: String,
}

/// 删除词汇短语命令
#[derive(Debug, Clone)]
pub struct DeletePhrase {
    pub phrase_id: i64,
}

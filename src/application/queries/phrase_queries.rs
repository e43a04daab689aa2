//! Phrase Queries

/// 列出所有短语查询
#[derive(Debug, Clone)]
pub struct ListPhrases;

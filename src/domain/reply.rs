//! LLM 回复解析器
//!
//! 文本生成服务返回自由格式的文本回复，按三个字面量分段标记组织：
//! `[SPANISH TEXT]`、`[ENGLISH TRANSLATION]`、`[VOCABULARY USAGE]`。
//! 逐行扫描，遇到标记切换当前段，其余行累积到当前段，直到下一个标记或输入结束。
//!
//! 上游格式是自由文本，标记可能缺失或顺序错乱，解析结果用 `ReplyOutcome`
//! 标记完整程度，调用方据此区分"服务降级"和"未生成内容"。

/// 西班牙语正文段标记
pub const MARKER_SPANISH: &str = "[SPANISH TEXT]";
/// 英语翻译段标记
pub const MARKER_ENGLISH: &str = "[ENGLISH TRANSLATION]";
/// 词汇用法段标记
pub const MARKER_VOCABULARY: &str = "[VOCABULARY USAGE]";

/// 解析完整程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// 三段齐全且正文非空
    Complete,
    /// 正文非空，但翻译或词汇用法缺失
    Partial,
    /// 无可用正文
    Unparseable,
}

/// 解析后的回复
#[derive(Debug, Clone)]
pub struct ParsedReply {
    pub outcome: ReplyOutcome,
    /// 生成的西班牙语正文（已去除首尾空白）
    pub passage: String,
    /// 英语翻译
    pub translation: Option<String>,
    /// 词汇用法说明
    pub vocabulary_usage: Option<String>,
}

impl ParsedReply {
    /// 正文是否可用
    pub fn has_passage(&self) -> bool {
        !self.passage.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Spanish,
    English,
    Vocabulary,
}

/// 解析文本生成服务的回复
///
/// 标记匹配是包含匹配（标记出现在行内任意位置均切换段），
/// 与上游约定的输出格式一致，同时容忍模型在标记行附加空白或标点。
pub fn parse_reply(raw: &str) -> ParsedReply {
    let mut spanish = String::new();
    let mut english = String::new();
    let mut vocabulary = String::new();
    let mut current: Option<Section> = None;

    for line in raw.lines() {
        if line.contains(MARKER_SPANISH) {
            current = Some(Section::Spanish);
            continue;
        } else if line.contains(MARKER_ENGLISH) {
            current = Some(Section::English);
            continue;
        } else if line.contains(MARKER_VOCABULARY) {
            current = Some(Section::Vocabulary);
            continue;
        }

        match current {
            Some(Section::Spanish) => {
                spanish.push_str(line);
                spanish.push('\n');
            }
            Some(Section::English) => {
                english.push_str(line);
                english.push('\n');
            }
            Some(Section::Vocabulary) => {
                vocabulary.push_str(line);
                vocabulary.push('\n');
            }
            // 标记出现前的行丢弃
            None => {}
        }
    }

    let passage = spanish.trim().to_string();
    let translation = non_empty(english);
    let vocabulary_usage = non_empty(vocabulary);

    let outcome = if passage.is_empty() {
        ReplyOutcome::Unparseable
    } else if translation.is_some() && vocabulary_usage.is_some() {
        ReplyOutcome::Complete
    } else {
        ReplyOutcome::Partial
    };

    ParsedReply {
        outcome,
        passage,
        translation,
        vocabulary_usage,
    }
}

fn non_empty(section: String) -> Option<String> {
    let trimmed = section.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "\
[SPANISH TEXT]
Tomamos mate y comimos asado.

[ENGLISH TRANSLATION]
We drank mate and ate asado.

[VOCABULARY USAGE]
- mate: used in the first sentence
- asado: used in the first sentence
";

    #[test]
    fn test_parse_complete_reply() {
        let parsed = parse_reply(FULL_REPLY);
        assert_eq!(parsed.outcome, ReplyOutcome::Complete);
        assert_eq!(parsed.passage, "Tomamos mate y comimos asado.");
        assert_eq!(
            parsed.translation.as_deref(),
            Some("We drank mate and ate asado.")
        );
        assert!(parsed
            .vocabulary_usage
            .as_deref()
            .unwrap()
            .contains("- mate"));
    }

    #[test]
    fn test_parse_partial_reply_missing_translation() {
        let raw = "[SPANISH TEXT]\nHola che, ¿todo bien?\n";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.outcome, ReplyOutcome::Partial);
        assert_eq!(parsed.passage, "Hola che, ¿todo bien?");
        assert!(parsed.translation.is_none());
        assert!(parsed.vocabulary_usage.is_none());
    }

    #[test]
    fn test_parse_unparseable_reply() {
        let parsed = parse_reply("I cannot generate that text.");
        assert_eq!(parsed.outcome, ReplyOutcome::Unparseable);
        assert!(!parsed.has_passage());
        assert!(parsed.translation.is_none());
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_reply("");
        assert_eq!(parsed.outcome, ReplyOutcome::Unparseable);
    }

    #[test]
    fn test_marker_inside_line_switches_section() {
        // 模型偶尔在标记前后输出额外字符
        let raw = "Sure! [SPANISH TEXT]\nChe, vení.\n  [ENGLISH TRANSLATION]  \nHey, come here.\n[VOCABULARY USAGE]\n- che\n";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.outcome, ReplyOutcome::Complete);
        assert_eq!(parsed.passage, "Che, vení.");
        assert_eq!(parsed.translation.as_deref(), Some("Hey, come here."));
    }

    #[test]
    fn test_lines_before_first_marker_are_dropped() {
        let raw = "preamble that should vanish\n[SPANISH TEXT]\nTexto.\n";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.passage, "Texto.");
    }

    #[test]
    fn test_multiline_sections_preserve_inner_lines() {
        let raw = "[SPANISH TEXT]\nPrimera línea.\nSegunda línea.\n[ENGLISH TRANSLATION]\nFirst line.\nSecond line.\n[VOCABULARY USAGE]\n- x\n";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.passage, "Primera línea.\nSegunda línea.");
        assert_eq!(
            parsed.translation.as_deref(),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn test_whitespace_only_section_counts_as_missing() {
        let raw = "[SPANISH TEXT]\nTexto.\n[ENGLISH TRANSLATION]\n   \n";
        let parsed = parse_reply(raw);
        assert_eq!(parsed.outcome, ReplyOutcome::Partial);
        assert!(parsed.translation.is_none());
    }
}

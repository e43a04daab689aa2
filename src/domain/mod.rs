//! 领域层
//!
//! 纯文本处理逻辑，不依赖任何基础设施

pub mod reply;

pub use reply::{parse_reply, ParsedReply, ReplyOutcome};

//! Text Command Handlers - 生成工作流编排
//!
//! 每个请求严格串行执行：验证 → 文本生成 → 语音合成 → 媒体落盘 → 持久化。
//! 只有验证和文本生成是失败终点；文本生成成功后的每个阶段都降级而不中断。
//! 所有外部调用先于数据库写入，崩溃不会留下半写的数据库行
//! （插入失败可能遗留孤儿媒体文件，接受的缺口）。

use std::sync::Arc;

use crate::application::commands::GenerateText;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GeneratedTextRecord, MediaStorePort, NewGeneratedText, SpeechSynthesizerPort,
    TextGeneratorPort, TextRepositoryPort,
};
use crate::domain::ReplyOutcome;

/// 工作流保存音频时使用的固定文件名（扩展名决定存储后缀）
const GENERATED_AUDIO_NAME: &str = "generated_audio.mp3";

/// GenerateText Handler - 生成并持久化练习文本
pub struct GenerateTextHandler {
    text_generator: Arc<dyn TextGeneratorPort>,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    media_store: Arc<dyn MediaStorePort>,
    text_repo: Arc<dyn TextRepositoryPort>,
}

impl GenerateTextHandler {
    pub fn new(
        text_generator: Arc<dyn TextGeneratorPort>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        media_store: Arc<dyn MediaStorePort>,
        text_repo: Arc<dyn TextRepositoryPort>,
    ) -> Self {
        Self {
            text_generator,
            synthesizer,
            media_store,
            text_repo,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateText,
    ) -> Result<GeneratedTextRecord, ApplicationError> {
        // 1. 验证输入（此前不发生任何外部调用）
        if command.vocabulary.is_empty() {
            return Err(ApplicationError::validation(
                "Vocabulary list cannot be empty",
            ));
        }

        // 2. 文本生成：调用失败或无可用正文都终止整个请求，不落任何记录
        let reply = self
            .text_generator
            .generate(&command.vocabulary)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Text generation call failed");
                ApplicationError::external_service(format!("Text generation failed: {}", e))
            })?;

        if reply.outcome == ReplyOutcome::Unparseable || !reply.has_passage() {
            tracing::error!("Text generation produced no usable passage");
            return Err(ApplicationError::external_service(
                "Text generation produced no usable passage",
            ));
        }

        if reply.outcome == ReplyOutcome::Partial {
            tracing::warn!("Generated reply is missing sections, continuing with parsed parts");
        }

        // 3+4. 语音合成与落盘：任何失败都降级为"无音频"，不影响文本持久化
        let audio_file_id = self.synthesize_and_store(&reply.passage).await;

        // 5. 单条插入，组合三个阶段的结果
        let record = self
            .text_repo
            .insert(&NewGeneratedText {
                passage: reply.passage,
                translation: reply.translation,
                vocabulary_usage: reply.vocabulary_usage,
                audio_file_id,
            })
            .await?;

        tracing::info!(
            text_id = record.id,
            has_audio = record.audio_file_id.is_some(),
            "Generated text persisted"
        );

        Ok(record)
    }

    /// 合成语音并写入媒体存储，返回媒体标识符
    ///
    /// 合成失败、无音频数据、存储失败统一返回 None
    async fn synthesize_and_store(&self, passage: &str) -> Option<String> {
        let audio = match self.synthesizer.synthesize(passage).await {
            Ok(audio) if !audio.audio_data.is_empty() => audio,
            Ok(_) => {
                tracing::warn!("Synthesizer returned no audio data");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Audio synthesis unavailable, continuing without audio");
                return None;
            }
        };

        let mut payload = std::io::Cursor::new(audio.audio_data);
        match self.media_store.save(&mut payload, GENERATED_AUDIO_NAME).await {
            Ok(file_id) => {
                tracing::info!(file_id = %file_id, "Generated audio saved");
                Some(file_id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save generated audio, continuing without audio");
                None
            }
        }
    }
}

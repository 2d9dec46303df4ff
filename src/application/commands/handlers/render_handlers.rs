//! Render Command Handlers

use std::sync::Arc;

use crate::application::commands::{RenderSpeech, RenderedSpeech};
use crate::application::error::{ApplicationError, MISSING_TEXT_MESSAGE};
use crate::application::ports::{SpeechEnginePort, SynthesisRequest, AUDIO_CONTENT_TYPE};

/// RenderSpeech Handler
///
/// 在内存中合成，不落盘
pub struct RenderSpeechHandler {
    tts_engine: Arc<dyn SpeechEnginePort>,
}

impl RenderSpeechHandler {
    pub fn new(tts_engine: Arc<dyn SpeechEnginePort>) -> Self {
        Self { tts_engine }
    }

    pub async fn handle(&self, command: RenderSpeech) -> Result<RenderedSpeech, ApplicationError> {
        let text = command
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ApplicationError::input_missing(MISSING_TEXT_MESSAGE))?;

        let request = SynthesisRequest::new(text, &command.lang, command.slow)?;
        let audio_data = self.tts_engine.synthesize(&request).await?;

        tracing::info!(
            engine = self.tts_engine.name(),
            lang = %request.language(),
            slow = request.slow(),
            text_len = request.text().chars().count(),
            chunks = request.chunks().len(),
            audio_size = audio_data.len(),
            "Speech rendered"
        );

        Ok(RenderedSpeech {
            audio_data,
            content_type: AUDIO_CONTENT_TYPE,
        })
    }
}

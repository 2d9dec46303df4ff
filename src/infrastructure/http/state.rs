//! Application State

use std::sync::Arc;

use crate::application::{RenderSpeechHandler, SpeechEnginePort};

/// 应用状态
///
/// 请求之间不共享可变状态
pub struct AppState {
    pub tts_engine: Arc<dyn SpeechEnginePort>,
    pub render_handler: RenderSpeechHandler,
    /// 未提供 lang 参数时使用的语言
    pub default_lang: String,
}

impl AppState {
    pub fn new(tts_engine: Arc<dyn SpeechEnginePort>, default_lang: impl Into<String>) -> Self {
        Self {
            tts_engine: tts_engine.clone(),
            render_handler: RenderSpeechHandler::new(tts_engine),
            default_lang: default_lang.into(),
        }
    }
}

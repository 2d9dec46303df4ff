//! Speech Engine Port - TTS 合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{split_text, Language, LanguageError};

/// 合成音频的 Content-Type
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// TTS 错误
///
/// 所有变体都属于“合成失败”：批处理中记录日志，服务中返回 500
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No text to speak")]
    EmptyText,

    #[error(transparent)]
    UnsupportedLanguage(#[from] LanguageError),
}

/// 合成请求
///
/// 只能通过 [`SynthesisRequest::new`] 构造，保证文本可发音、语言受支持
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    text: String,
    chunks: Vec<String>,
    language: Language,
    slow: bool,
}

impl SynthesisRequest {
    /// 创建并校验合成请求
    pub fn new(text: impl Into<String>, lang: &str, slow: bool) -> Result<Self, TtsError> {
        let language = Language::parse(lang)?;
        let text = text.into();
        let chunks = split_text(&text);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }

        Ok(Self {
            text,
            chunks,
            language,
            slow,
        })
    }

    /// 原始文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 分块后的文本（每块不超过引擎上限）
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn slow(&self) -> bool {
        self.slow
    }
}

/// Speech Engine Port
///
/// 外部 TTS 引擎的抽象接口
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// 合成语音，返回 MP3 字节
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError>;

    /// 引擎名称（用于日志和健康检查）
    fn name(&self) -> &'static str;
}

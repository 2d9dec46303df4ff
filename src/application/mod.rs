//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechEngine、AudioStore、WordSource）
//! - commands: 预渲染与即时合成命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{PrerenderWordsHandler, RenderSpeechHandler},
    PrerenderReport, PrerenderWords, RenderSpeech, RenderedSpeech,
};

pub use error::{ApplicationError, MISSING_TEXT_MESSAGE};

pub use ports::{
    AudioStoreError, AudioStorePort, SpeechEnginePort, SynthesisRequest, TtsError,
    WordSourceError, WordSourcePort, AUDIO_CONTENT_TYPE,
};

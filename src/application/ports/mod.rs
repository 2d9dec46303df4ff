//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_store;
mod tts_engine;
mod word_source;

pub use audio_store::{AudioStoreError, AudioStorePort};
pub use tts_engine::{SpeechEnginePort, SynthesisRequest, TtsError, AUDIO_CONTENT_TYPE};
pub use word_source::{WordSourceError, WordSourcePort};

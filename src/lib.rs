//! wordtts - 基于外部 TTS 引擎的单词预渲染与即时合成
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 音频文件命名（百分号编码）、单词表、语言代码、文本分块
//!
//! 应用层 (application/):
//! - Ports: SpeechEngine, AudioStore, WordSource
//! - Commands: PrerenderWords（批处理）, RenderSpeech（HTTP）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Google TTS Client, Fake TTS Client, 文件存储
//! - HTTP: `GET /tts`

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{load_config, AppConfig};

//! Fake TTS Client - 离线 TTS 引擎
//!
//! 不访问网络，始终返回固定音频（或固定错误）。用于测试和无网络的本地开发。

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeechEnginePort, SynthesisRequest, TtsError};

/// 一帧静音 MPEG-1 Layer III（128kbps / 44.1kHz，417 字节）
fn silent_mp3_frame() -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
    frame
}

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 设置后每次调用都以此信息失败
    pub failure: Option<String>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: silent_mp3_frame(),
            failure: None,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::info!(
            audio_size = config.audio_data.len(),
            failing = config.failure.is_some(),
            "FakeTtsClient initialized"
        );
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// 每次调用都失败的客户端
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(FakeTtsClientConfig {
            failure: Some(message.into()),
            ..Default::default()
        })
    }

    /// 已收到的合成调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            text_len = request.text().len(),
            lang = %request.language(),
            slow = request.slow(),
            "FakeTtsClient: returning fixed audio"
        );

        match &self.config.failure {
            Some(message) => Err(TtsError::ServiceError(message.clone())),
            None => Ok(self.config.audio_data.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

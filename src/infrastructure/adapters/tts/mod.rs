//! TTS Adapter - 语音合成引擎实现

mod fake_tts_client;
mod google_tts_client;

use std::sync::Arc;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use google_tts_client::{GoogleTtsClient, GoogleTtsClientConfig};

use crate::application::ports::{SpeechEnginePort, TtsError};
use crate::config::{TtsConfig, TtsProvider};

/// 按配置创建 TTS 引擎
pub fn create_speech_engine(config: &TtsConfig) -> Result<Arc<dyn SpeechEnginePort>, TtsError> {
    match config.provider {
        TtsProvider::Google => {
            let client_config =
                GoogleTtsClientConfig::new(config.url.clone()).with_timeout(config.timeout_secs);
            Ok(Arc::new(GoogleTtsClient::new(client_config)?))
        }
        TtsProvider::Fake => Ok(Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()))),
    }
}

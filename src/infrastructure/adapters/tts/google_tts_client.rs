//! Google TTS Client - 调用 Google 翻译的 TTS RPC
//!
//! 实现 SpeechEnginePort trait。每个文本块发送一次请求，返回的 base64 音频按顺序拼接。
//!
//! 外部 TTS API:
//! POST https://translate.google.com/_/TranslateWebserverUi/data/batchexecute
//! Request: f.req=[[["jQ1olc","[\"<text>\",\"<lang>\",<true|null>,\"null\"]",null,"generic"]]]
//! Response: 多行文本，包含 RPC ID 的行携带 base64 编码的 MP3

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use reqwest::{header, Client, StatusCode};
use serde_json::json;
use std::time::Duration;

use crate::application::ports::{SpeechEnginePort, SynthesisRequest, TtsError};

const TTS_RPC_ID: &str = "jQ1olc";
const BATCH_EXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";
const REFERER: &str = "http://translate.google.com/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
const NO_AUDIO_MESSAGE: &str = "No audio stream in response";

static AUDIO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("audio pattern is valid"));

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// 服务基础 URL（不含路径）
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google TTS 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    /// 创建新的客户端
    pub fn new(config: GoogleTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 RPC URL
    fn rpc_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            BATCH_EXECUTE_PATH
        )
    }

    /// 合成单个文本块
    async fn synthesize_chunk(
        &self,
        chunk: &str,
        lang: &str,
        slow: bool,
    ) -> Result<Vec<u8>, TtsError> {
        let response = self
            .client
            .post(self.rpc_url())
            .header(header::REFERER, REFERER)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(package_rpc(chunk, lang, slow))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::ServiceError(format!(
                "{} from TTS API. Probable cause: {}",
                status,
                probable_cause(status)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        extract_audio(&body)
    }
}

/// 构造 batchexecute 表单体
fn package_rpc(text: &str, lang: &str, slow: bool) -> String {
    let speed: Option<bool> = slow.then_some(true);
    let parameter = json!([text, lang, speed, "null"]).to_string();
    let rpc = json!([[[TTS_RPC_ID, parameter, null, "generic"]]]).to_string();
    format!("f.req={}&", utf8_percent_encode(&rpc, NON_ALPHANUMERIC))
}

/// 从响应体中提取并解码音频
fn extract_audio(body: &str) -> Result<Vec<u8>, TtsError> {
    let mut audio = Vec::new();

    for line in body.lines().filter(|line| line.contains(TTS_RPC_ID)) {
        let captures = AUDIO_PATTERN
            .captures(line)
            .ok_or_else(|| TtsError::InvalidResponse(NO_AUDIO_MESSAGE.to_string()))?;

        let decoded = STANDARD
            .decode(&captures[1])
            .map_err(|e| TtsError::InvalidResponse(format!("Invalid audio payload: {}", e)))?;
        audio.extend_from_slice(&decoded);
    }

    if audio.is_empty() {
        return Err(TtsError::InvalidResponse(NO_AUDIO_MESSAGE.to_string()));
    }

    Ok(audio)
}

fn probable_cause(status: StatusCode) -> &'static str {
    match status.as_u16() {
        403 => "Bad token or upstream API changes",
        404 => "Unsupported tld",
        500..=599 => "Upstream API error. Try again later.",
        _ => "Unknown",
    }
}

#[async_trait]
impl SpeechEnginePort for GoogleTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let lang = request.language().code();
        let mut audio = Vec::new();

        for (index, chunk) in request.chunks().iter().enumerate() {
            tracing::debug!(
                url = %self.rpc_url(),
                part = index,
                chunk_len = chunk.chars().count(),
                lang = %lang,
                slow = request.slow(),
                "Sending TTS request"
            );

            let part = self.synthesize_chunk(chunk, lang, request.slow()).await?;
            audio.extend_from_slice(&part);
        }

        tracing::debug!(
            parts = request.chunks().len(),
            audio_size = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 批量预渲染配置
    #[serde(default)]
    pub batch: BatchConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求未带 lang 参数时的语言
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5002
}

fn default_lang() -> String {
    "he".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_lang: default_lang(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 引擎类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// Google 翻译 TTS
    #[default]
    Google,
    /// 离线假引擎（固定返回静音帧）
    Fake,
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 引擎类型
    #[serde(default)]
    pub provider: TtsProvider,

    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 批量预渲染配置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// 项目目录：读取 `<project_dir>/words.txt`，写入 `<project_dir>/tts/`
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// 目标语言
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_project_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            lang: default_lang(),
        }
    }
}

impl BatchConfig {
    /// 单词表路径
    pub fn words_path(&self) -> PathBuf {
        self.project_dir.join("words.txt")
    }

    /// 音频输出目录
    pub fn output_dir(&self) -> PathBuf {
        self.project_dir.join("tts")
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

//! Audio Store Port - 出站端口
//!
//! 预渲染音频的持久化抽象：按单词寻址

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Store Port - 出站端口
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// 单词对应的音频文件路径（纯函数）
    fn audio_path(&self, word: &str) -> PathBuf;

    /// 检查音频是否已存在
    async fn exists(&self, word: &str) -> bool;

    /// 保存音频数据
    async fn save(&self, word: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError>;
}

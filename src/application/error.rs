//! 应用层错误定义
//!
//! 对外只有两类错误：输入缺失、合成失败。写入失败与合成失败一样按单词记录，不中断批处理

use thiserror::Error;

use crate::application::ports::{AudioStoreError, TtsError, WordSourceError};

/// 缺少 text 参数时的错误信息
pub const MISSING_TEXT_MESSAGE: &str = "missing text parameter";

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入缺失（缺少必填参数、单词表不存在或为空）
    #[error("{0}")]
    InputMissing(String),

    /// 合成失败
    #[error("TTS failed: {0}")]
    SynthesisFailed(#[from] TtsError),

    /// 音频写入失败
    #[error("Storage error: {0}")]
    StorageError(#[from] AudioStoreError),
}

impl ApplicationError {
    /// 创建输入缺失错误
    pub fn input_missing(message: impl Into<String>) -> Self {
        Self::InputMissing(message.into())
    }
}

impl From<WordSourceError> for ApplicationError {
    fn from(err: WordSourceError) -> Self {
        Self::InputMissing(err.to_string())
    }
}

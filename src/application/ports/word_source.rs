//! Word Source Port - 入站数据端口
//!
//! 单词表来源的抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::WordList;

/// 单词表加载错误
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Could not find {0}. Make sure you run this from the project root.")]
    NotFound(String),

    #[error("No words found in {0}")]
    Empty(String),

    #[error("Failed to read {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Word Source Port
#[async_trait]
pub trait WordSourcePort: Send + Sync {
    /// 加载单词表，空表视为错误
    async fn load(&self) -> Result<WordList, WordSourceError>;
}

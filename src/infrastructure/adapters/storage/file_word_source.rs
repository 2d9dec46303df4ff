//! File Word Source - 从 UTF-8 文本文件读取单词表

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::{WordSourceError, WordSourcePort};
use crate::domain::WordList;

/// 文件单词表
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WordSourcePort for FileWordSource {
    async fn load(&self) -> Result<WordList, WordSourceError> {
        let path_display = self.path.display().to_string();

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => WordSourceError::NotFound(path_display.clone()),
                _ => WordSourceError::Unreadable {
                    path: path_display.clone(),
                    message: e.to_string(),
                },
            })?;

        let words = WordList::parse(&content);
        if words.is_empty() {
            return Err(WordSourceError::Empty(path_display));
        }

        tracing::debug!(path = %path_display, count = words.len(), "Word list loaded");

        Ok(words)
    }
}

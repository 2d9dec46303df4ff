//! File Audio Store - 文件系统音频存储实现
//!
//! 实现 AudioStorePort trait。文件名为单词的百分号编码加 `.mp3`。
//! 写入先落到同目录下的短名临时文件再 persist（原子重命名），
//! 中断不会留下被误判为完成的半截文件；临时文件名与单词长度无关。

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStoreError, AudioStorePort};
use crate::domain::audio_file_name;

/// 文件系统音频存储
pub struct FileAudioStore {
    /// 输出目录（首次写入时创建）
    base_dir: PathBuf,
}

impl FileAudioStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStorePort for FileAudioStore {
    fn audio_path(&self, word: &str) -> PathBuf {
        self.base_dir.join(audio_file_name(word))
    }

    async fn exists(&self, word: &str) -> bool {
        fs::try_exists(self.audio_path(word)).await.unwrap_or(false)
    }

    async fn save(&self, word: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| AudioStoreError::IoError(e.to_string()))?;

        let audio_path = self.audio_path(word);
        let base_dir = self.base_dir.clone();
        let target = audio_path.clone();
        let bytes = data.to_vec();

        tokio::task::spawn_blocking(move || write_atomically(&base_dir, &target, &bytes))
            .await
            .map_err(|e| AudioStoreError::IoError(e.to_string()))??;

        tracing::debug!(
            path = %audio_path.display(),
            size = data.len(),
            "Saved audio"
        );

        Ok(audio_path)
    }
}

/// 在 `dir` 中写临时文件后 persist 到 `target`；失败时临时文件随 drop 删除
fn write_atomically(dir: &Path, target: &Path, data: &[u8]) -> Result<(), AudioStoreError> {
    let mut part = tempfile::Builder::new()
        .prefix(".")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| AudioStoreError::IoError(e.to_string()))?;

    part.write_all(data)
        .map_err(|e| AudioStoreError::IoError(e.to_string()))?;

    part.persist(target)
        .map_err(|e| AudioStoreError::IoError(e.error.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_exists() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path().join("tts"));

        assert!(!store.exists("שלום").await);

        let path = store.save("שלום", b"fake mp3 data").await.unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "%D7%A9%D7%9C%D7%95%D7%9D.mp3"
        );
        assert!(store.exists("שלום").await);
        assert_eq!(std::fs::read(&path).unwrap(), b"fake mp3 data");
    }

    #[tokio::test]
    async fn test_directory_created_lazily() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path().join("tts"));

        assert!(!store.exists("word").await);
        assert!(!store.base_dir().exists());

        store.save("word", b"data").await.unwrap();
        assert!(store.base_dir().is_dir());
    }

    #[tokio::test]
    async fn test_save_leaves_no_part_file() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path());

        store.save("a b/c", b"data").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a%20b%2Fc.mp3".to_string()]);
    }

    #[tokio::test]
    async fn test_save_long_file_name() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path().join("tts"));

        // 41 个希伯来字母 (每个编码为 6 字节) + "a" + ".mp3" = 251 字节
        let word = format!("{}a", "ש".repeat(41));
        let name = audio_file_name(&word);
        assert_eq!(name.len(), 251);

        let path = store.save(&word, b"data").await.unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), name);
        assert!(store.exists(&word).await);

        let entries = std::fs::read_dir(store.base_dir()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_audio_path_is_deterministic() {
        let store = FileAudioStore::new("/data/tts");
        assert_eq!(store.audio_path("hi there"), PathBuf::from("/data/tts/hi%20there.mp3"));
        assert_eq!(store.audio_path("hi there"), store.audio_path("hi there"));
    }
}

//! Prerender Command Handlers
//!
//! 顺序处理单词表：已存在则跳过，否则合成并写入。单个单词失败只记录日志，
//! 不中断后续单词，也不重试。

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::{PrerenderReport, PrerenderWords};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStorePort, SpeechEnginePort, SynthesisRequest, WordSourcePort,
};

/// PrerenderWords Handler
pub struct PrerenderWordsHandler {
    word_source: Arc<dyn WordSourcePort>,
    audio_store: Arc<dyn AudioStorePort>,
    tts_engine: Arc<dyn SpeechEnginePort>,
}

impl PrerenderWordsHandler {
    pub fn new(
        word_source: Arc<dyn WordSourcePort>,
        audio_store: Arc<dyn AudioStorePort>,
        tts_engine: Arc<dyn SpeechEnginePort>,
    ) -> Self {
        Self {
            word_source,
            audio_store,
            tts_engine,
        }
    }

    /// 执行预渲染
    ///
    /// 仅当单词表缺失或为空时返回错误（此时不会写入任何文件）
    pub async fn handle(
        &self,
        command: PrerenderWords,
    ) -> Result<PrerenderReport, ApplicationError> {
        let words = self.word_source.load().await?;

        tracing::info!(
            count = words.len(),
            lang = %command.lang,
            engine = self.tts_engine.name(),
            "Generating mp3 files"
        );

        let mut report = PrerenderReport {
            total: words.len(),
            ..Default::default()
        };

        for word in words.iter() {
            let path = self.audio_store.audio_path(word);

            if self.audio_store.exists(word).await {
                tracing::info!(path = %path.display(), "Skipping (exists)");
                report.skipped += 1;
                continue;
            }

            tracing::info!(word = %word, path = %path.display(), "Generating");

            match self.render_word(word, &command.lang).await {
                Ok(_) => report.generated += 1,
                Err(e) => {
                    tracing::error!(word = %word, error = %e, "Failed to generate audio");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            total = report.total,
            generated = report.generated,
            skipped = report.skipped,
            failed = report.failed,
            "Done"
        );

        Ok(report)
    }

    async fn render_word(&self, word: &str, lang: &str) -> Result<PathBuf, ApplicationError> {
        let request = SynthesisRequest::new(word, lang, false)?;
        let audio_data = self.tts_engine.synthesize(&request).await?;
        Ok(self.audio_store.save(word, &audio_data).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio_file_name;
    use crate::infrastructure::adapters::{
        FakeTtsClient, FakeTtsClientConfig, FileAudioStore, FileWordSource,
    };
    use std::path::Path;
    use tempfile::tempdir;

    fn handler(project: &Path, engine: Arc<FakeTtsClient>) -> PrerenderWordsHandler {
        PrerenderWordsHandler::new(
            Arc::new(FileWordSource::new(project.join("words.txt"))),
            Arc::new(FileAudioStore::new(project.join("tts"))),
            engine,
        )
    }

    fn command() -> PrerenderWords {
        PrerenderWords {
            lang: "he".to_string(),
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_second_run_performs_no_synthesis() {
        let project = tempdir().unwrap();
        std::fs::write(project.path().join("words.txt"), "שלום\nתודה\n\nבוקר טוב\n").unwrap();
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let handler = handler(project.path(), engine.clone());

        let first = handler.handle(command()).await.unwrap();
        assert_eq!(first.total, 3);
        assert_eq!(first.generated, 3);
        assert_eq!(engine.call_count(), 3);
        let files_after_first = file_names(&project.path().join("tts"));

        let second = handler.handle(command()).await.unwrap();
        assert_eq!(second.skipped, 3);
        assert_eq!(second.generated, 0);
        assert_eq!(engine.call_count(), 3);
        assert_eq!(file_names(&project.path().join("tts")), files_after_first);

        let mut expected: Vec<String> = ["שלום", "תודה", "בוקר טוב"]
            .iter()
            .map(|w| audio_file_name(w))
            .collect();
        expected.sort();
        assert_eq!(files_after_first, expected);
    }

    #[tokio::test]
    async fn test_duplicate_word_rendered_once() {
        let project = tempdir().unwrap();
        std::fs::write(project.path().join("words.txt"), "hello\nhello\n").unwrap();
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));

        let report = handler(project.path(), engine.clone())
            .handle(command())
            .await
            .unwrap();
        assert_eq!(report.generated, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_word_list_writes_nothing() {
        let project = tempdir().unwrap();
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));

        let err = handler(project.path(), engine.clone())
            .handle(command())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InputMissing(_)));
        assert!(!project.path().join("tts").exists());
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_word_list_writes_nothing() {
        let project = tempdir().unwrap();
        std::fs::write(project.path().join("words.txt"), "\n   \n").unwrap();
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));

        let err = handler(project.path(), engine)
            .handle(command())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("No words found in"));
        assert!(!project.path().join("tts").exists());
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_batch() {
        let project = tempdir().unwrap();
        std::fs::write(project.path().join("words.txt"), "one\ntwo\nthree\n").unwrap();
        let engine = Arc::new(FakeTtsClient::failing("quota exceeded"));

        let report = handler(project.path(), engine.clone())
            .handle(command())
            .await
            .unwrap();
        assert_eq!(report.failed, 3);
        assert_eq!(report.generated, 0);
        assert_eq!(engine.call_count(), 3);
        assert!(!project.path().join("tts").exists());
    }

    #[tokio::test]
    async fn test_unpronounceable_word_counted_as_failure() {
        let project = tempdir().unwrap();
        std::fs::write(project.path().join("words.txt"), "...\nword\n").unwrap();
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));

        let report = handler(project.path(), engine.clone())
            .handle(command())
            .await
            .unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.generated, 1);
        assert_eq!(engine.call_count(), 1);
    }
}

//! generate-tts - 单词表批量预渲染
//!
//! 读取 `<project>/words.txt`，为每个尚未生成的单词写入 `<project>/tts/<encoded>.mp3`。
//! 没有命令行参数；路径与语言来自配置（见 `WORDTTS_BATCH__*`）。
//! 单词表缺失或为空时以非零状态退出。

use std::sync::Arc;

use wordtts::application::{PrerenderWords, PrerenderWordsHandler};
use wordtts::config::{load_config, print_config};
use wordtts::infrastructure::adapters::{create_speech_engine, FileAudioStore, FileWordSource};
use wordtts::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);
    print_config(&config);

    let word_source = Arc::new(FileWordSource::new(config.batch.words_path()));
    let audio_store = Arc::new(FileAudioStore::new(config.batch.output_dir()));
    let tts_engine = create_speech_engine(&config.tts)?;

    let handler = PrerenderWordsHandler::new(word_source, audio_store, tts_engine);
    let report = handler
        .handle(PrerenderWords {
            lang: config.batch.lang.clone(),
        })
        .await?;

    tracing::info!(
        output_dir = %config.batch.output_dir().display(),
        generated = report.generated,
        skipped = report.skipped,
        failed = report.failed,
        "Pre-render finished"
    );

    Ok(())
}

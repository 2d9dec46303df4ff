//! Storage Adapter - 文件系统实现

mod file_audio_store;
mod file_word_source;

pub use file_audio_store::FileAudioStore;
pub use file_word_source::FileWordSource;

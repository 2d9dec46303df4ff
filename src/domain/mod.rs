//! Domain Layer - 领域层
//!
//! 纯函数与值对象，不涉及 IO:
//! - audio_file_name: 单词 ↔ 音频文件名（百分号编码）
//! - word_list: 单词表解析
//! - language: 语言代码校验
//! - text_chunker: 超长文本分块

pub mod audio_file_name;
pub mod language;
pub mod text_chunker;
pub mod word_list;

pub use audio_file_name::{audio_file_name, decode_audio_file_name, decode_word, encode_word};
pub use language::{Language, LanguageError, SUPPORTED_LANGUAGES};
pub use text_chunker::{split_text, MAX_CHUNK_CHARS};
pub use word_list::WordList;

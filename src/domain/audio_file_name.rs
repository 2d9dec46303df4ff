//! 音频文件命名
//!
//! 单词 → 文件名的可逆百分号编码。除 unreserved 字符集（`A-Z a-z 0-9 - . _ ~`）
//! 以外的所有字节都编码为 `%XX`（大写十六进制），与既有缓存文件名保持兼容。

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// 音频文件扩展名
pub const AUDIO_EXTENSION: &str = "mp3";

/// 需要编码的字符集：NON_ALPHANUMERIC 去掉 unreserved 标点
const WORD_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 百分号编码单词
pub fn encode_word(word: &str) -> String {
    utf8_percent_encode(word, WORD_ENCODE_SET).to_string()
}

/// 解码百分号编码的单词
///
/// 非法 UTF-8 序列返回 `None`
pub fn decode_word(encoded: &str) -> Option<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// 单词对应的音频文件名：`<encoded>.mp3`
pub fn audio_file_name(word: &str) -> String {
    format!("{}.{}", encode_word(word), AUDIO_EXTENSION)
}

/// 从音频文件名还原单词
pub fn decode_audio_file_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(&format!(".{}", AUDIO_EXTENSION))?;
    decode_word(stem)
}

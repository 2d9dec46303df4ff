//! Render Commands - 即时合成

/// 即时合成命令
#[derive(Debug, Clone)]
pub struct RenderSpeech {
    /// 要合成的文本（缺失或为空时返回输入缺失错误）
    pub text: Option<String>,
    /// 语言代码
    pub lang: String,
    /// 慢速朗读
    pub slow: bool,
}

/// 即时合成结果
#[derive(Debug, Clone)]
pub struct RenderedSpeech {
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}

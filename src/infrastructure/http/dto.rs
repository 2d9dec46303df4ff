//! Data Transfer Objects

use serde::Serialize;

/// `GET /tts` 查询参数
///
/// 全部为可选字符串：缺失与空值的判定交给应用层
#[derive(Debug, Default, PartialEq)]
pub struct TtsQuery {
    pub text: Option<String>,
    pub lang: Option<String>,
    pub slow: Option<String>,
}

impl TtsQuery {
    /// 由原始查询对构建；同名参数重复时取第一个值，未知参数忽略
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "text" => &mut query.text,
                "lang" => &mut query.lang,
                "slow" => &mut query.slow,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// 解析 slow 标志：`1` / `true` / `yes`（大小写不敏感）为真，其余为假
    pub fn slow_flag(&self) -> bool {
        self.slow
            .as_deref()
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }
}

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

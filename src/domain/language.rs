//! 语言代码
//!
//! TTS 引擎支持的语言表，以及已废弃地区代码的回退规则

use std::fmt;
use thiserror::Error;

/// 语言错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Language not supported: {0}")]
    Unsupported(String),
}

/// 支持的语言（代码, 名称）
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("iw", "Hebrew"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi (Gurmukhi)"),
    ("pl", "Polish"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("su", "Sundanese"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("yue", "Cantonese"),
    ("zh", "Chinese (Mandarin)"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Mandarin/Taiwan)"),
];

/// 已废弃代码 → 回退代码
const DEPRECATED_FALLBACKS: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "en-us", "en-ca", "en-uk", "en-gb", "en-au", "en-gh", "en-in", "en-ie", "en-nz",
            "en-ng", "en-ph", "en-za", "en-tz",
        ],
    ),
    ("fr", &["fr-fr"]),
    ("pt", &["pt-br"]),
    ("es", &["es-es", "es-us"]),
    ("zh-CN", &["zh-cn"]),
    ("zh-TW", &["zh-tw"]),
];

/// 经过校验的语言代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    /// 解析语言代码
    ///
    /// 先处理废弃代码回退，再精确匹配，最后大小写不敏感匹配
    pub fn parse(code: &str) -> Result<Self, LanguageError> {
        let code = code.trim();
        let lowered = code.to_lowercase();

        let resolved = DEPRECATED_FALLBACKS
            .iter()
            .find(|(_, deprecated)| deprecated.contains(&lowered.as_str()))
            .map(|(fallback, _)| *fallback)
            .unwrap_or(code);

        if resolved != code {
            tracing::debug!(from = %code, to = %resolved, "Deprecated language code, falling back");
        }

        SUPPORTED_LANGUAGES
            .iter()
            .find(|(c, _)| *c == resolved)
            .or_else(|| {
                SUPPORTED_LANGUAGES
                    .iter()
                    .find(|(c, _)| c.eq_ignore_ascii_case(resolved))
            })
            .map(|&(code, name)| Self { code, name })
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        let he = Language::parse("he").unwrap();
        assert_eq!(he.code(), "he");
        assert_eq!(he.name(), "Hebrew");
        assert_eq!(Language::parse("iw").unwrap().name(), "Hebrew");
    }

    #[test]
    fn test_deprecated_codes_fall_back() {
        assert_eq!(Language::parse("en-us").unwrap().code(), "en");
        assert_eq!(Language::parse("EN-GB").unwrap().code(), "en");
        assert_eq!(Language::parse("pt-br").unwrap().code(), "pt");
        assert_eq!(Language::parse("zh-cn").unwrap().code(), "zh-CN");
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(Language::parse("FR").unwrap().code(), "fr");
        assert_eq!(Language::parse("pt-pt").unwrap().code(), "pt-PT");
    }

    #[test]
    fn test_unsupported() {
        let err = Language::parse("xx-invalid").unwrap_err();
        assert_eq!(err.to_string(), "Language not supported: xx-invalid");
        assert!(Language::parse("").is_err());
    }
}

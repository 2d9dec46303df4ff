//! 文本分块
//!
//! TTS 引擎单次请求最多接受 100 个字符。超长文本先按标点切分，
//! 仍超长的片段再按空格（或硬截断）切到上限以内。

/// 单次请求的最大字符数
pub const MAX_CHUNK_CHARS: usize = 100;

/// 检查是否为句读分隔符（总是分割）
#[inline]
fn is_hard_delimiter(ch: char) -> bool {
    matches!(
        ch,
        '?' | '!' | ';' | '…' | '¿' | '¡' | '(' | ')' | '[' | ']' | '—'
            | '。' | '？' | '！' | '；' | '，' | '、' | '：'
    )
}

/// 检查是否为软分隔符（`.` 和 `,` 仅在后面跟空白时分割，避免切开 3.14 / 1,000）
#[inline]
fn is_soft_delimiter(ch: char) -> bool {
    matches!(ch, '.' | ',')
}

/// 检查字符是否为标点
#[inline]
fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || is_hard_delimiter(ch)
        || matches!(ch, '«' | '»' | '“' | '”' | '‘' | '’' | '„' | '·' | '־' | '״' | '׳')
}

/// 检查片段是否只有标点或空白（不可发音，丢弃）
#[inline]
fn is_unpronounceable(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || is_punctuation(c))
}

/// 折叠连续空白为单个空格
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按标点切分（不做长度限制）
fn split_by_punctuation(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        let next = chars.peek().copied();
        let should_split = if is_hard_delimiter(ch) {
            true
        } else if is_soft_delimiter(ch) {
            next.map_or(true, char::is_whitespace)
        } else if ch == ':' {
            // 12:30 不切分
            next.map_or(true, |n| !n.is_ascii_digit())
        } else {
            false
        };

        if should_split {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                tokens.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }

    tokens
}

/// 将片段切到 `max_chars` 以内：优先在上限内最后一个空格处切分，否则硬截断
fn minimize(token: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = token.trim();

    while rest.chars().count() > max_chars {
        let cut = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let split_at = match rest[..cut].rfind(' ') {
            Some(i) if i > 0 => i,
            _ => cut,
        };

        pieces.push(rest[..split_at].trim_end().to_string());
        rest = rest[split_at..].trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }

    pieces
}

/// 将文本切分为可逐块合成的片段
///
/// 返回空 Vec 表示没有可发音的内容
pub fn split_text(text: &str) -> Vec<String> {
    let text = normalize_whitespace(text);
    if text.is_empty() {
        return Vec::new();
    }

    let tokens = if text.chars().count() <= MAX_CHUNK_CHARS {
        vec![text]
    } else {
        split_by_punctuation(&text)
    };

    tokens
        .iter()
        .flat_map(|token| minimize(token, MAX_CHUNK_CHARS))
        .filter(|chunk| !is_unpronounceable(chunk))
        .collect()
}

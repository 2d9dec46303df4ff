//! Prerender Commands - 批量预渲染

/// 批量预渲染命令
#[derive(Debug, Clone)]
pub struct PrerenderWords {
    /// 目标语言代码
    pub lang: String,
}

/// 预渲染统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerenderReport {
    /// 单词总数
    pub total: usize,
    /// 本次新生成
    pub generated: usize,
    /// 已存在而跳过
    pub skipped: usize,
    /// 失败（合成或写入）
    pub failed: usize,
}

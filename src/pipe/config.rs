//! # 管道配置
//!
//! `PipeConfig` 保存除输入源以外的全部选项，并负责后缀规范化。
//! 支持 `serde` 序列化，可直接嵌入调用方的配置文件。
//!
//! ## 依赖关系
//! - 被 `pipe/mod.rs`, `pipe/dest.rs`, `cli/` 使用

use crate::error::{PipeError, Result};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 管道配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// 输出目录，`None` 表示不写文件
    pub destination: Option<PathBuf>,
    /// 输入后缀（目录输入时过滤文件），允许带前导 `*`
    pub input_suffix: String,
    /// 输出后缀，为空时沿用输入后缀
    pub output_suffix: String,
    /// 是否打乱顺序
    pub shuffle: bool,
    /// 打乱顺序使用的随机种子（设置即开启打乱），`None` 时取系统熵
    pub seed: Option<u64>,
    /// 最多处理的条目数，`None` 或 `0` 表示不限制
    pub limit: Option<usize>,
    /// 构造时跳过输出已存在的输入
    pub prefilter: bool,
    /// 是否显示进度条
    pub progress: bool,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            destination: None,
            input_suffix: String::new(),
            output_suffix: String::new(),
            shuffle: false,
            seed: None,
            limit: None,
            prefilter: true,
            progress: true,
        }
    }
}

impl PipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_input_suffix(mut self, suffix: &str) -> Self {
        self.input_suffix = suffix.to_string();
        self
    }

    pub fn with_output_suffix(mut self, suffix: &str) -> Self {
        self.output_suffix = suffix.to_string();
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// 设置随机种子（同时开启打乱）
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = Some(seed);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_prefilter(mut self, prefilter: bool) -> Self {
        self.prefilter = prefilter;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// 是否打乱顺序（设置了 `seed` 即视为打乱）
    pub fn shuffles(&self) -> bool {
        self.shuffle || self.seed.is_some()
    }

    /// 生效的条目上限（`Some(0)` 视为不限制）
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }
}

/// 规范化输入后缀
///
/// `""` 与 `"."` 都是空路径，结果为空串；随后去掉前导 `*`。
pub fn normalize_input_suffix(raw: &str) -> String {
    if raw.is_empty() || raw == "." {
        return String::new();
    }
    raw.trim_start_matches('*').to_string()
}

/// 规范化输出后缀
///
/// 为空时沿用已规范化的输入后缀，仍为空则报错。
/// 字面量 `"."` 表示输出文件不带扩展名。
pub fn normalize_output_suffix(raw: &str, input_suffix: &str) -> Result<String> {
    let suffix = if raw.is_empty() { input_suffix } else { raw };

    if suffix.is_empty() {
        return Err(PipeError::MissingSuffix);
    }

    if suffix == "." {
        return Ok(String::new());
    }

    Ok(suffix.trim_start_matches('*').to_string())
}

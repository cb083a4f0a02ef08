//! # 文件收集器
//!
//! 按后缀收集目录下的条目列表。
//!
//! ## 功能
//! - 仅扫描目录本层（不递归）
//! - `*<suffix>` glob 模式匹配（包括以 `.` 开头的文件和非 UTF-8 文件名）
//! - 结果按路径排序，保证顺序确定
//!
//! ## 依赖关系
//! - 被 `pipe/` 调用（解析输入目录和输出目录）
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{PipeError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// 扫描目录
    directory: PathBuf,
    /// 匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配全部条目）
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: "*".to_string(),
        }
    }

    /// 设置后缀，匹配模式变为 `*<suffix>`
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.pattern = format!("*{}", suffix);
        self
    }

    /// 当前匹配模式
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 收集所有匹配的条目
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let pattern = glob::Pattern::new(&self.pattern).map_err(|e| PipeError::InvalidPattern {
            pattern: self.pattern.clone(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| PipeError::DirectoryRead {
                path: self.directory.display().to_string(),
                source: e,
            })?;

            // 非 UTF-8 文件名按替换字符匹配，路径本身保持原样
            if pattern.matches(&entry.file_name().to_string_lossy()) {
                entries.push(entry.into_path());
            }
        }

        entries.sort();
        Ok(entries)
    }
}

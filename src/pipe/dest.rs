//! # 输出目录
//!
//! 输出目录在构造时创建，并记录当时已存在的输出文件。
//!
//! ## 依赖关系
//! - 被 `pipe/mod.rs`, `pipe/iter.rs` 使用
//! - 使用 `batch/collector.rs` 扫描已有输出

use super::config::normalize_output_suffix;
use crate::batch::FileCollector;
use crate::error::{PipeError, Result};
use crate::utils::output;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 文件输出目标
#[derive(Debug, Clone)]
pub(crate) struct Destination {
    directory: PathBuf,
    suffix: String,
    /// 构造时已存在的输出
    existing: HashSet<PathBuf>,
}

impl Destination {
    /// 创建目录并扫描已有输出
    pub(crate) fn open(directory: &Path, output_suffix: &str, input_suffix: &str) -> Result<Self> {
        fs::create_dir_all(directory).map_err(|e| PipeError::DirectoryCreate {
            path: directory.display().to_string(),
            source: e,
        })?;

        let suffix = normalize_output_suffix(output_suffix, input_suffix).inspect_err(|e| {
            output::print_error(format_args!("Pipe: {}", e));
        })?;

        let existing = FileCollector::new(directory)
            .with_suffix(&suffix)
            .collect()?
            .into_iter()
            .collect();

        Ok(Self {
            directory: directory.to_path_buf(),
            suffix,
            existing,
        })
    }

    pub(crate) fn directory(&self) -> &Path {
        &self.directory
    }

    pub(crate) fn suffix(&self) -> &str {
        &self.suffix
    }

    /// 是否在构造时已存在
    pub(crate) fn contains(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    /// 推导输出路径：`<directory>/<stem 去掉扩展名><suffix>`
    pub(crate) fn output_file(&self, item: &Path) -> PathBuf {
        let stem = Path::new(item.file_stem().unwrap_or_default());
        let mut name = stem.file_stem().unwrap_or_default().to_os_string();
        name.push(&self.suffix);
        self.directory.join(name)
    }
}

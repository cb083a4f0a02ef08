//! # 输入源
//!
//! 输入源在构造时显式选择：
//! - `Files`: 扫描目录中匹配后缀的文件
//! - `Sequence`: 内存中的条目序列（长度确定）
//! - `Stream`: 一次性惰性迭代器（长度未定义）

use std::fmt;
use std::path::PathBuf;

/// 一次性条目流
pub type ItemStream<T> = Box<dyn Iterator<Item = T> + Send>;

/// 文件输入源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    /// 输入目录（不递归扫描）
    pub directory: PathBuf,
}

/// 管道输入源
pub enum Source<T> {
    /// 目录文件，后缀由 `PipeConfig::input_suffix` 指定
    Files(FileSource),
    /// 条目序列
    Sequence(Vec<T>),
    /// 惰性条目流
    Stream(ItemStream<T>),
}

impl<T> Source<T> {
    /// 目录输入源
    pub fn files(directory: impl Into<PathBuf>) -> Self {
        Source::Files(FileSource {
            directory: directory.into(),
        })
    }

    /// 序列输入源
    pub fn items(items: impl IntoIterator<Item = T>) -> Self {
        Source::Sequence(items.into_iter().collect())
    }

    /// 流式输入源（只能被消费一次）
    pub fn stream<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + Send + 'static,
    {
        Source::Stream(Box::new(iter))
    }

    /// 是否为目录输入
    pub fn is_files(&self) -> bool {
        matches!(self, Source::Files(_))
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Source::Sequence(items)
    }
}

impl<T> From<FileSource> for Source<T> {
    fn from(files: FileSource) -> Self {
        Source::Files(files)
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Files(files) => f.debug_tuple("Files").field(files).finish(),
            Source::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Source::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

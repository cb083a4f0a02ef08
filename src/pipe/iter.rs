//! # 管道迭代
//!
//! 每次迭代都从已解析输入序列的开头重新遍历。
//!
//! ## 功能
//! - 输出到目录时逐条推导输出路径
//! - 输出路径在迭代时已存在则警告并跳过（构造后才出现的输出）
//! - 计数器控制 `limit`：计数在检查之前递增，实际最多产出 `limit + 1` 条
//!
//! ## 依赖关系
//! - 被 `pipe/mod.rs` 使用
//! - 使用 `utils/output.rs` 打印警告

use super::dest::Destination;
use super::item::PipeItem;
use super::source::ItemStream;
use crate::utils::output;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::slice;

/// 单次处理任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task<T> {
    /// 输入条目
    pub input: T,
    /// 推导出的输出路径（仅输出到目录时存在）
    pub output: Option<PathBuf>,
}

impl<T> Task<T> {
    pub fn new(input: T, output: Option<PathBuf>) -> Self {
        Self { input, output }
    }

    /// 拆分为 `(input, output)`
    pub fn into_parts(self) -> (T, Option<PathBuf>) {
        (self.input, self.output)
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

pub(crate) enum InputsIter<'a, T> {
    Items(slice::Iter<'a, T>),
    Stream(&'a mut ItemStream<T>),
}

/// 管道迭代器
pub struct PipeIter<'a, T> {
    inputs: InputsIter<'a, T>,
    destination: Option<&'a Destination>,
    limit: Option<usize>,
    offered: usize,
    finished: bool,
    progress: ProgressBar,
}

impl<'a, T> PipeIter<'a, T> {
    pub(crate) fn new(
        inputs: InputsIter<'a, T>,
        destination: Option<&'a Destination>,
        limit: Option<usize>,
        progress: ProgressBar,
    ) -> Self {
        Self {
            inputs,
            destination,
            limit,
            offered: 0,
            finished: false,
            progress,
        }
    }
}

impl<T: PipeItem> Iterator for PipeIter<'_, T> {
    type Item = Task<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let input = match &mut self.inputs {
                InputsIter::Items(items) => items.next().cloned(),
                InputsIter::Stream(stream) => stream.next(),
            };

            let Some(input) = input else {
                self.finished = true;
                break;
            };

            let index = self.offered;
            self.offered += 1;

            if let Some(limit) = self.limit {
                if index > limit {
                    self.finished = true;
                    break;
                }
            }

            let Some(destination) = self.destination else {
                return Some(Task::new(input, None));
            };

            let output_file = destination.output_file(&input.item_path());
            if output_file.exists() {
                self.progress.suspend(|| {
                    output::print_warning(format_args!(
                        "Did not expect {} to exist, skipping",
                        output_file.display()
                    ));
                });
                continue;
            }

            return Some(Task::new(input, Some(output_file)));
        }

        None
    }
}

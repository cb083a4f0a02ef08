//! # 管道模块
//!
//! `Pipe` 将输入源解析为输入序列，与输出目录配对，
//! 并对每个任务调用用户函数（顺序或并行）。
//!
//! ## 构造流程
//! 1. 按 `Source` 变体解析输入（目录输入按后缀扫描并排序）
//! 2. 设置了输出目录时：创建目录、规范化输出后缀、记录已有输出
//! 3. `prefilter`：剔除输出已存在的输入
//! 4. `shuffle`（或设置了 `seed`）：按条目路径排序后用种子随机打乱
//!
//! 只有 `Source::Stream` 会保持惰性，直到被预过滤或打乱物化。
//!
//! ## 依赖关系
//! - 使用 `batch/` 收集文件与执行任务
//! - 使用 `utils/` 输出与进度条
//! - 子模块: config, dest, item, iter, source

pub mod config;
mod dest;
pub mod item;
pub mod iter;
pub mod source;

pub use config::PipeConfig;
pub use item::PipeItem;
pub use iter::{PipeIter, Task};
pub use source::{FileSource, ItemStream, Source};

use crate::batch::{BatchRunner, FileCollector};
use crate::error::{PipeError, Result};
use crate::utils::progress;

use config::normalize_input_suffix;
use dest::Destination;
use iter::InputsIter;

use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::path::{Path, PathBuf};

/// 已解析的输入序列
enum Inputs<T> {
    Items(Vec<T>),
    Stream(ItemStream<T>),
}

impl<T> Inputs<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Inputs::Items(items) => items,
            Inputs::Stream(stream) => stream.collect(),
        }
    }
}

/// 批处理管道
pub struct Pipe<T> {
    inputs: Inputs<T>,
    destination: Option<Destination>,
    from_files: bool,
    limit: Option<usize>,
    progress: bool,
}

impl<T: PipeItem> Pipe<T> {
    /// 解析输入源和输出目录，构造管道
    pub fn new(source: Source<T>, config: PipeConfig) -> Result<Self> {
        let input_suffix = normalize_input_suffix(&config.input_suffix);
        let from_files = source.is_files();

        let mut inputs = match source {
            Source::Files(files) => {
                Inputs::Items(resolve_files(&files.directory, &input_suffix)?)
            }
            Source::Sequence(items) => Inputs::Items(items),
            Source::Stream(stream) => Inputs::Stream(stream),
        };

        let destination = match &config.destination {
            Some(directory) => Some(Destination::open(
                directory,
                &config.output_suffix,
                &input_suffix,
            )?),
            None => None,
        };

        if config.prefilter {
            if let Some(dest) = &destination {
                let kept = inputs
                    .into_vec()
                    .into_iter()
                    .filter(|item| !dest.contains(&dest.output_file(&item.item_path())))
                    .collect();
                inputs = Inputs::Items(kept);
            }
        }

        if config.shuffles() {
            // 先按条目路径排序，打乱结果只取决于种子
            let mut items = inputs.into_vec();
            items.sort_by_cached_key(|item| item.item_path());
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            items.shuffle(&mut rng);
            inputs = Inputs::Items(items);
        }

        Ok(Self {
            inputs,
            destination,
            from_files,
            limit: config.effective_limit(),
            progress: config.progress,
        })
    }

    /// 条目数（受 `limit` 限制）；未物化的流返回 `LengthUndefined`
    pub fn len(&self) -> Result<usize> {
        let count = match &self.inputs {
            Inputs::Items(items) => items.len(),
            Inputs::Stream(_) => return Err(PipeError::LengthUndefined),
        };

        Ok(match self.limit {
            Some(limit) => count.min(limit),
            None => count,
        })
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// 是否从目录读取输入
    pub fn is_input_from_files(&self) -> bool {
        self.from_files
    }

    /// 是否输出到目录
    pub fn is_output_to_files(&self) -> bool {
        self.destination.is_some()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_ref().map(Destination::directory)
    }

    /// 规范化后的输出后缀
    pub fn output_suffix(&self) -> Option<&str> {
        self.destination.as_ref().map(Destination::suffix)
    }

    /// 路径是否在构造时已作为输出存在
    pub fn contains(&self, path: &Path) -> bool {
        self.destination
            .as_ref()
            .is_some_and(|dest| dest.contains(path))
    }

    /// 推导条目对应的输出路径（仅输出到目录时有值）
    pub fn output_file(&self, item: &T) -> Option<PathBuf> {
        self.destination
            .as_ref()
            .map(|dest| dest.output_file(&item.item_path()))
    }

    /// 遍历待处理任务
    pub fn iter(&mut self) -> PipeIter<'_, T> {
        self.iter_with(progress::create_hidden())
    }

    fn iter_with(&mut self, pb: ProgressBar) -> PipeIter<'_, T> {
        let inputs = match &mut self.inputs {
            Inputs::Items(items) => InputsIter::Items(items.iter()),
            Inputs::Stream(stream) => InputsIter::Stream(stream),
        };
        PipeIter::new(inputs, self.destination.as_ref(), self.limit, pb)
    }

    /// 对每个任务调用 `processor`，结果按提交顺序返回
    ///
    /// `jobs == 1` 顺序执行，`0` 使用全部核心，其余为线程数。
    pub fn apply<R, F>(&mut self, processor: F, jobs: usize) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(Task<T>) -> R + Sync + Send,
    {
        self.try_apply(|task| Ok::<_, PipeError>(processor(task)), jobs)
    }

    /// 与 [`Pipe::apply`] 相同，但 `processor` 可以失败
    ///
    /// 顺序模式在第一个错误处停止；并行模式返回线程池最先观察到的错误。
    pub fn try_apply<R, E, F>(
        &mut self,
        processor: F,
        jobs: usize,
    ) -> std::result::Result<Vec<R>, E>
    where
        R: Send,
        E: Send + From<PipeError>,
        F: Fn(Task<T>) -> std::result::Result<R, E> + Sync + Send,
    {
        let runner = BatchRunner::new(jobs);

        if runner.is_sequential() {
            let pb = self.progress_bar(self.len().ok());
            let results = runner.run_sequential(self.iter_with(pb.clone()), &pb, &processor);
            pb.finish_and_clear();
            results
        } else {
            // 迭代在调用线程上完成，存在性检查与警告保持顺序
            let tasks: Vec<Task<T>> = self.iter().collect();
            let pb = self.progress_bar(Some(tasks.len()));
            let results = runner.run_parallel(tasks, &pb, &processor);
            pb.finish_and_clear();
            results
        }
    }

    fn progress_bar(&self, len: Option<usize>) -> ProgressBar {
        if !self.progress {
            return progress::create_hidden();
        }
        match len {
            Some(len) => progress::create_progress_bar(len as u64, "Processing"),
            None => progress::create_spinner("Processing"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pipe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs: &dyn fmt::Debug = match &self.inputs {
            Inputs::Items(items) => items,
            Inputs::Stream(_) => &"Stream(..)",
        };
        f.debug_struct("Pipe")
            .field("inputs", inputs)
            .field("destination", &self.destination)
            .field("from_files", &self.from_files)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<'a, T: PipeItem> IntoIterator for &'a mut Pipe<T> {
    type Item = Task<T>;
    type IntoIter = PipeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 扫描输入目录并转换为条目
fn resolve_files<T: PipeItem>(directory: &Path, suffix: &str) -> Result<Vec<T>> {
    FileCollector::new(directory)
        .with_suffix(suffix)
        .collect()?
        .into_iter()
        .map(|path| {
            T::from_path(path).ok_or(PipeError::UnsupportedFileItem {
                item_type: std::any::type_name::<T>(),
            })
        })
        .collect()
}

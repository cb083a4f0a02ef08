//! # 批量执行器
//!
//! 顺序或并行执行批量处理任务。
//!
//! ## 功能
//! - `jobs == 1` 时在调用线程上按顺序执行
//! - 其余情况基于 rayon 线程池并行执行（`0` 表示使用全部核心）
//! - 结果始终按提交顺序返回，与完成顺序无关
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `pipe/mod.rs` 调用
//! - 使用 `rayon` 进行并行计算，`num_cpus` 探测核心数

use crate::error::PipeError;

use indicatif::ProgressBar;
use rayon::prelude::*;

/// 批量执行器
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（`0` 表示使用全部核心）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 实际使用的作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 是否顺序执行
    pub fn is_sequential(&self) -> bool {
        self.jobs == 1
    }

    /// 顺序处理，遇到第一个错误立即返回
    pub fn run_sequential<I, R, E, F>(
        &self,
        items: I,
        pb: &ProgressBar,
        mut processor: F,
    ) -> Result<Vec<R>, E>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Result<R, E>,
    {
        let mut results = Vec::new();
        for item in items {
            results.push(processor(item)?);
            pb.inc(1);
        }
        Ok(results)
    }

    /// 并行处理任务列表，结果按提交顺序收集
    pub fn run_parallel<T, R, E, F>(
        &self,
        items: Vec<T>,
        pb: &ProgressBar,
        processor: F,
    ) -> Result<Vec<R>, E>
    where
        T: Send,
        R: Send,
        E: Send + From<PipeError>,
        F: Fn(T) -> Result<R, E> + Sync + Send,
    {
        // 每次调用使用独立线程池，不影响全局池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| PipeError::ThreadPool(e.to_string()))?;

        pool.install(|| {
            items
                .into_par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        })
    }
}

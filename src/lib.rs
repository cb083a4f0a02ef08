//! # batchpipe - 批量文件处理管道
//!
//! 遍历输入（内存序列、流或按后缀匹配的目录文件），与输出目录中的
//! 目标文件配对，跳过已生成的输出，可选打乱顺序，
//! 并顺序或并行地对每个任务调用用户函数。
//!
//! ## 示例
//! ```no_run
//! use batchpipe::{Pipe, PipeConfig, Source};
//! use std::path::PathBuf;
//!
//! let config = PipeConfig::new()
//!     .with_destination("out")
//!     .with_input_suffix("*.json")
//!     .with_output_suffix(".csv");
//!
//! let mut pipe: Pipe<PathBuf> = Pipe::new(Source::files("data"), config)?;
//! let pairs = pipe.apply(
//!     |task| {
//!         let (input, output) = task.into_parts();
//!         // 在这里把 input 转换为 output
//!         (input, output)
//!     },
//!     0,
//! )?;
//! println!("{} file(s)", pairs.len());
//! # Ok::<(), batchpipe::PipeError>(())
//! ```
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── pipe/       (管道：输入解析、输出配对、迭代、调用)
//!   │     └── batch/ (目录收集与顺序/并行执行)
//!   ├── cli/        (clap 参数组)
//!   ├── utils/      (美化输出、进度条)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod pipe;
pub mod utils;

pub use cli::PipeArgs;
pub use error::{PipeError, Result};
pub use pipe::{FileSource, Pipe, PipeConfig, PipeItem, PipeIter, Source, Task};

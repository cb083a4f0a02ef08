//! # 批量处理模块
//!
//! 提供目录收集与批量执行能力。
//!
//! ## 功能
//! - 按后缀收集目录条目
//! - 顺序 / 并行处理
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被 `pipe/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::BatchRunner;

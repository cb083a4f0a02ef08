//! # 统一错误处理模块
//!
//! 定义 batchpipe 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// batchpipe 统一错误类型
#[derive(Error, Debug)]
pub enum PipeError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Must set input_suffix or output_suffix when destination is a file-based path")]
    MissingSuffix,

    #[error("Invalid suffix pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Item type `{item_type}` cannot be built from a file path")]
    UnsupportedFileItem { item_type: &'static str },

    // ─────────────────────────────────────────────────────────────
    // 迭代错误
    // ─────────────────────────────────────────────────────────────
    #[error("Length is undefined for an unconsumed stream source")]
    LengthUndefined,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PipeError>;

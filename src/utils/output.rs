//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `pipe/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::fmt::Display;

/// 打印错误消息（stderr）
pub fn print_error(msg: impl Display) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息（stderr，不干扰调用方的 stdout）
pub fn print_warning(msg: impl Display) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

//! # CLI 参数组
//!
//! 使用 `clap` 定义可复用的管道参数组，
//! 下游命令行程序通过 `#[command(flatten)]` 嵌入。
//!
//! ## 依赖关系
//! - 转换为 `pipe/config.rs` 的 `PipeConfig`

use crate::pipe::PipeConfig;

use clap::Args;
use std::path::PathBuf;

/// 管道参数
#[derive(Args, Debug, Clone)]
pub struct PipeArgs {
    /// Destination directory for output files (created if missing)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Suffix of input files when reading a directory (e.g. ".json" or "*.json")
    #[arg(long, default_value = "")]
    pub input_suffix: String,

    /// Suffix of generated output files (defaults to the input suffix)
    #[arg(long, default_value = "")]
    pub output_suffix: String,

    /// Shuffle the processing order
    #[arg(long, default_value_t = false)]
    pub shuffle: bool,

    /// Seed for --shuffle (implies --shuffle)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of items to process (0 or negative = no limit)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Process inputs even if their output already exists at startup
    #[arg(long, default_value_t = false)]
    pub no_prefilter: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    #[arg(short, long, env = "BATCHPIPE_JOBS", default_value_t = 0)]
    pub jobs: usize,
}

impl PipeArgs {
    /// 转换为管道配置
    pub fn to_config(&self) -> PipeConfig {
        PipeConfig {
            destination: self.dest.clone(),
            input_suffix: self.input_suffix.clone(),
            output_suffix: self.output_suffix.clone(),
            shuffle: self.shuffle,
            seed: self.seed,
            limit: self.limit.and_then(|limit| usize::try_from(limit).ok()),
            prefilter: !self.no_prefilter,
            progress: !self.no_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        pipe: PipeArgs,
    }

    fn parse(args: &[&str]) -> PipeArgs {
        TestCli::parse_from(std::iter::once("test").chain(args.iter().copied())).pipe
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).to_config();
        assert_eq!(config, PipeConfig::default());
    }

    #[test]
    fn test_full_args() {
        let args = parse(&[
            "--dest",
            "out",
            "--input-suffix",
            "*.json",
            "--output-suffix",
            ".csv",
            "--seed",
            "11",
            "--limit",
            "5",
            "--no-prefilter",
            "--no-progress",
            "-j",
            "4",
        ]);
        assert_eq!(args.jobs, 4);

        let config = args.to_config();
        assert_eq!(config.destination, Some(PathBuf::from("out")));
        assert_eq!(config.input_suffix, "*.json");
        assert_eq!(config.output_suffix, ".csv");
        assert!(!config.shuffle);
        assert!(config.shuffles());
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.limit, Some(5));
        assert!(!config.prefilter);
        assert!(!config.progress);
    }

    #[test]
    fn test_negative_limit() {
        let config = parse(&["--limit=-1"]).to_config();
        assert_eq!(config.limit, None);
    }
}

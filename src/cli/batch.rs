//! # batch 子命令 CLI 定义
//!
//! 批量扫描计算目录并求带隙。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/gap.rs` 的 GapOptions
//! - 参数传递给 `commands/batch.rs`

use super::gap::GapOptions;
use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Root directory containing calculation folders
    pub input: PathBuf,

    #[command(flatten)]
    pub options: GapOptions,

    /// Glob pattern for log files
    #[arg(long, default_value = "*.abo")]
    pub log_pattern: String,

    /// Glob pattern for eigenvalue files
    #[arg(long, default_value = "*_EIG")]
    pub eig_pattern: String,

    /// Recurse into nested subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Filename for the summary CSV output
    #[arg(long, default_value = "gap_summary.csv")]
    pub output_csv: PathBuf,
}

//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `gap`: 单个日志 / `_EIG` 文件对求带隙
//! - `fermi`: 列出日志中的全部费米能
//! - `batch`: 批量目录求带隙
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: gap, fermi, batch

pub mod batch;
pub mod fermi;
pub mod gap;

use clap::{Parser, Subcommand};

/// abigap - ABINIT 带隙提取工具
#[derive(Parser)]
#[command(name = "abigap")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Compute band gaps (direct/indirect) from ABINIT outputs",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the band gap from a log (fermie) and an eigenvalue (_EIG) file
    Gap(gap::GapArgs),

    /// List every Fermi energy reported in a log file
    Fermi(fermi::FermiArgs),

    /// Compute band gaps for every calculation directory under a root
    Batch(batch::BatchArgs),
}

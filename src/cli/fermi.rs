//! # fermi 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fermi.rs`

use clap::Args;
use std::path::PathBuf;

/// fermi 子命令参数
#[derive(Args, Debug)]
pub struct FermiArgs {
    /// Path to the ABINIT log (e.g. ab.abo)
    pub log: PathBuf,
}

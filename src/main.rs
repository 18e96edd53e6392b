//! # abigap - ABINIT 带隙提取工具
//!
//! 从 ABINIT 日志中的 `fermie` 与 `_EIG` 本征值列表求带隙，
//! 判断直接/间接带隙。
//!
//! ## 子命令
//! - `gap`   - 单个日志 / `_EIG` 文件对求带隙
//! - `fermi` - 列出日志中的全部费米能
//! - `batch` - 批量目录求带隙
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (fermie / _EIG 解析器)
//!   │     ├── analysis/  (占据分类与带隙汇总)
//!   │     ├── batch/     (批量收集与并行执行)
//!   │     ├── report/    (CSV 导出与绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

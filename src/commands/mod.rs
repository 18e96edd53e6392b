//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analysis/`, `report/`, `utils/`
//! - 子模块: gap, fermi, batch

pub mod batch;
pub mod fermi;
pub mod gap;

use crate::cli::gap::GapOptions;
use crate::cli::Commands;
use crate::error::{AbigapError, Result};
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Gap(args) => gap::execute(args),
        Commands::Fermi(args) => fermi::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}

/// 容差必须为非负有限值
fn validate_options(options: &GapOptions) -> Result<()> {
    if !options.tol.is_finite() || options.tol < 0.0 {
        return Err(AbigapError::InvalidArgument(format!(
            "--tol must be a non-negative number of hartree, got {}",
            options.tol
        )));
    }
    Ok(())
}

fn ensure_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(AbigapError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

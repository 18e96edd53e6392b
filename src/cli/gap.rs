//! # gap 子命令 CLI 定义
//!
//! 单次运行：日志 + `_EIG` 文件对。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `GapOptions` 同时被 `cli/batch.rs` 复用
//! - 参数传递给 `commands/gap.rs`

use crate::models::EnergyUnit;
use clap::Args;
use std::path::PathBuf;

/// 默认费米能比较容差 (hartree)
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// 费米能选择、容差与显示单位
#[derive(Args, Debug, Clone)]
pub struct GapOptions {
    /// 0-based index of the fermie entry to use (default: last)
    #[arg(long, env = "ABIGAP_FERMI_INDEX")]
    pub fermi_index: Option<usize>,

    /// Output energy unit
    #[arg(long, value_enum, default_value = "ev", env = "ABIGAP_UNIT")]
    pub unit: EnergyUnit,

    /// Tolerance in hartree for comparing eigenvalues to the Fermi energy
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, env = "ABIGAP_TOL")]
    pub tol: f64,
}

/// gap 子命令参数
#[derive(Args, Debug)]
pub struct GapArgs {
    /// Path to the ABINIT log (e.g. ab.abo) containing fermie entries
    pub log: PathBuf,

    /// Path to the eigenvalue ASCII file (e.g. abo_DS3_EIG)
    pub eig: PathBuf,

    #[command(flatten)]
    pub options: GapOptions,

    /// Optional CSV path to write per-k VBM/CBM
    #[arg(long)]
    pub dump_csv: Option<PathBuf>,

    /// Optional PNG path for a per-k band edge plot
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Do not print the per-k table
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}

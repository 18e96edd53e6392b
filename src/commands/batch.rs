//! # batch 命令实现
//!
//! 对输入目录下的每个计算独立求带隙，并行执行。
//!
//! ## 功能
//! - 收集日志 / `_EIG` 文件对
//! - 并行运行完整带隙流程（rayon）
//! - 终端汇总表与 CSV 输出
//! - 单个计算失败不影响其余计算
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/`, `analysis/`, `report/`

use super::validate_options;
use crate::analysis;
use crate::batch::{BatchRunner, CalculationPair, PairCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::cli::gap::GapOptions;
use crate::error::{AbigapError, Result};
use crate::models::{format_sci, EnergyUnit};
use crate::parsers;
use crate::report::{self, SummaryRow};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct BatchRow {
    #[tabled(rename = "Calculation")]
    directory: String,
    #[tabled(rename = "fermie (hartree)")]
    fermi: String,
    #[tabled(rename = "VBM (kpt/band)")]
    vbm: String,
    #[tabled(rename = "CBM (kpt/band)")]
    cbm: String,
    #[tabled(rename = "Gap")]
    gap: String,
    #[tabled(rename = "Nature")]
    nature: String,
}

impl BatchRow {
    fn from_summary(row: &SummaryRow, unit: EnergyUnit) -> Self {
        BatchRow {
            directory: row.directory.clone(),
            fermi: format_sci(row.fermi_hartree, 8),
            vbm: format!("{}/{}", row.vbm_kpt, row.vbm_band),
            cbm: format!("{}/{}", row.cbm_kpt, row.cbm_band),
            gap: unit.format(row.gap_hartree),
            nature: (if row.direct { "direct" } else { "indirect" }).to_string(),
        }
    }
}

/// 执行批量带隙分析
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Band Gap Analysis");

    validate_options(&args.options)?;
    if !args.input.is_dir() {
        return Err(AbigapError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    output::print_info(&format!(
        "Scanning '{}' for '{}' + '{}' pairs...",
        args.input.display(),
        args.log_pattern,
        args.eig_pattern
    ));

    let scan = PairCollector::new(args.input.clone(), &args.log_pattern, &args.eig_pattern)?
        .recursive(args.recursive)
        .collect();

    for dir in &scan.incomplete {
        output::print_skip(&format!("'{}': missing log or _EIG file", dir.display()));
    }

    if scan.pairs.is_empty() {
        output::print_warning("No complete log/_EIG pairs found.");
        return Ok(());
    }

    let total = scan.pairs.len();
    output::print_info(&format!("Found {} calculations", total));

    // 并行处理
    let options = args.options.clone();
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(scan.pairs, |pair| process_pair(pair, &options))?;

    if !result.successes.is_empty() {
        let rows: Vec<BatchRow> = result
            .successes
            .iter()
            .map(|r| BatchRow::from_summary(r, options.unit))
            .collect();
        output::print_header("Band gaps");
        println!("{}", Table::new(&rows));

        report::summary_to_csv(&result.successes, &args.output_csv)?;
        output::print_success(&format!(
            "Summary saved to '{}'",
            args.output_csv.display()
        ));
    }

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} failed",
        result.successes.len(),
        result.failures.len()
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed calculations:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    if result.successes.is_empty() {
        return Err(AbigapError::Other(format!(
            "All {} calculations failed",
            result.total()
        )));
    }

    Ok(())
}

/// 处理单个文件对
fn process_pair(pair: &CalculationPair, options: &GapOptions) -> ProcessResult<SummaryRow> {
    match run_pair(pair, options) {
        Ok(row) => ProcessResult::Success(row),
        Err(e) => ProcessResult::Failed(pair.name(), e.to_string()),
    }
}

fn run_pair(pair: &CalculationPair, options: &GapOptions) -> Result<SummaryRow> {
    let input = parsers::load_calculation(&pair.log, &pair.eig, options.fermi_index)?;
    let result = analysis::analyze(&input.kpoints, input.fermi.energy, options.tol)?;

    Ok(SummaryRow::new(
        pair.name(),
        file_name(&pair.log),
        file_name(&pair.eig),
        &input.fermi,
        &result.summary,
    ))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

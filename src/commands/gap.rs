//! # gap 命令实现
//!
//! 单个日志 / `_EIG` 文件对的完整带隙流程。
//!
//! ## 功能
//! - 提取并选择费米能
//! - 解析逐 k 点本征值并分类
//! - 汇总全局 VBM/CBM、带隙与直接/间接性质
//! - 可选导出逐 k 点 CSV 与能带边图
//!
//! ## 依赖关系
//! - 使用 `cli/gap.rs` 定义的参数
//! - 使用 `parsers/`, `analysis/`, `report/`
//! - 使用 `utils/output.rs`

use super::{ensure_file, validate_options};
use crate::analysis::{self, partition_bands};
use crate::cli::gap::GapArgs;
use crate::error::Result;
use crate::models::{format_sci, BandEdge, EnergyUnit, GapSummary, GlobalEdge, KPointBlock};
use crate::parsers;
use crate::report;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 逐 k 点表格行
#[derive(Debug, Clone, Tabled)]
struct KPointRow {
    #[tabled(rename = "kpt")]
    kpt: usize,
    #[tabled(rename = "Coords")]
    coords: String,
    #[tabled(rename = "wtk")]
    weight: String,
    #[tabled(rename = "nband")]
    nband: usize,
    #[tabled(rename = "Occ.")]
    occupied: usize,
    #[tabled(rename = "VBM band")]
    vbm_band: String,
    #[tabled(rename = "VBM energy")]
    vbm_energy: String,
    #[tabled(rename = "CBM band")]
    cbm_band: String,
    #[tabled(rename = "CBM energy")]
    cbm_energy: String,
}

/// 执行带隙分析
pub fn execute(args: GapArgs) -> Result<()> {
    output::print_header("Band Gap Analysis");

    validate_options(&args.options)?;
    ensure_file(&args.log)?;
    ensure_file(&args.eig)?;

    let unit = args.options.unit;
    let tol = args.options.tol;

    let input = parsers::load_calculation(&args.log, &args.eig, args.options.fermi_index)?;
    let fermi = input.fermi;

    output::print_info(&format!(
        "Using fermie index {} -> fermie = {} hartree ({} entries in '{}')",
        fermi.index,
        format_sci(fermi.energy, 8),
        input.fermi_energies.len(),
        args.log.display()
    ));
    output::print_info(&format!(
        "Parsed {} k-points from '{}'",
        input.kpoints.len(),
        args.eig.display()
    ));

    let result = analysis::analyze(&input.kpoints, fermi.energy, tol)?;

    if !args.no_table {
        let rows: Vec<KPointRow> = input
            .kpoints
            .iter()
            .zip(&result.per_kpoint)
            .map(|(block, edges)| {
                kpoint_row(block, edges.extrema.vbm, edges.extrema.cbm, fermi.energy, tol, unit)
            })
            .collect();

        output::print_header(&format!("Per-k band edges ({})", unit));
        println!("{}", Table::new(&rows));
    }

    print_summary(&result.summary, unit);

    if let Some(ref path) = args.dump_csv {
        report::per_kpoint_to_csv(&result.per_kpoint, path)?;
        output::print_success(&format!("Per-k VBM/CBM written to '{}'", path.display()));
    }

    if let Some(ref path) = args.plot {
        report::plot_band_edges(&result.per_kpoint, &result.summary, fermi.energy, unit, path)?;
        output::print_success(&format!("Band edge plot saved to '{}'", path.display()));
    }

    Ok(())
}

fn kpoint_row(
    block: &KPointBlock,
    vbm: Option<BandEdge>,
    cbm: Option<BandEdge>,
    fermi: f64,
    tol: f64,
    unit: EnergyUnit,
) -> KPointRow {
    let partition = partition_bands(&block.energies, fermi, tol);
    let band = |e: Option<BandEdge>| e.map(|e| e.band.to_string()).unwrap_or_else(|| "-".into());
    let energy = |e: Option<BandEdge>| {
        e.map(|e| unit.format(e.energy))
            .unwrap_or_else(|| "-".into())
    };

    KPointRow {
        kpt: block.index,
        coords: block.coords_label(),
        weight: block
            .weight
            .map(|w| format!("{:.5}", w))
            .unwrap_or_else(|| "-".into()),
        nband: block.nband,
        occupied: partition.occupied.len(),
        vbm_band: band(vbm),
        vbm_energy: energy(vbm),
        cbm_band: band(cbm),
        cbm_energy: energy(cbm),
    }
}

/// 全局能带边的一行描述
fn describe_edge(edge: &GlobalEdge, unit: EnergyUnit) -> String {
    format!(
        "kpt #{}, band #{}, energy = {} ({})",
        edge.kpt,
        edge.band,
        unit.format(edge.energy),
        unit.other().format(edge.energy)
    )
}

/// 打印全局结果
fn print_summary(summary: &GapSummary, unit: EnergyUnit) {
    output::print_header("Global results");
    output::print_field("VBM", &describe_edge(&summary.vbm, unit));
    output::print_field("CBM", &describe_edge(&summary.cbm, unit));

    let gap = summary.gap_hartree();
    output::print_field(
        "Band gap",
        &format!("{} ({})", unit.format(gap), unit.other().format(gap)),
    );
    output::print_field("Nature", summary.nature());
    if !summary.is_direct() {
        output::print_field(
            "Positions",
            &format!(
                "VBM at kpt #{}, CBM at kpt #{}",
                summary.vbm.kpt, summary.cbm.kpt
            ),
        );
    }
    output::print_separator();
}

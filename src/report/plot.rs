//! # 能带边绘图
//!
//! 绘制逐 k 点 VBM/CBM 曲线，标出费米能与全局能带边。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 调用
//! - 使用 `plotters` 绘制 PNG

use crate::error::{AbigapError, Result};
use crate::models::{EnergyUnit, GapSummary, KPointEdges};

use plotters::prelude::*;
use std::path::Path;

fn plot_err<E: std::fmt::Display>(e: E) -> AbigapError {
    AbigapError::PlotError(e.to_string())
}

/// 绘制能带边图（x 轴为 k 点在文件中的序号）
pub fn plot_band_edges(
    edges: &[KPointEdges],
    summary: &GapSummary,
    fermi_hartree: f64,
    unit: EnergyUnit,
    output_path: &Path,
) -> Result<()> {
    let vbm_points: Vec<(f64, f64)> = edges
        .iter()
        .enumerate()
        .filter_map(|(i, k)| {
            k.extrema
                .vbm
                .map(|e| ((i + 1) as f64, unit.from_hartree(e.energy)))
        })
        .collect();
    let cbm_points: Vec<(f64, f64)> = edges
        .iter()
        .enumerate()
        .filter_map(|(i, k)| {
            k.extrema
                .cbm
                .map(|e| ((i + 1) as f64, unit.from_hartree(e.energy)))
        })
        .collect();

    if vbm_points.is_empty() && cbm_points.is_empty() {
        return Err(AbigapError::PlotError("No band edges to plot".to_string()));
    }

    let fermi = unit.from_hartree(fermi_hartree);
    let y_min = vbm_points
        .iter()
        .chain(&cbm_points)
        .map(|(_, y)| *y)
        .fold(fermi, f64::min);
    let y_max = vbm_points
        .iter()
        .chain(&cbm_points)
        .map(|(_, y)| *y)
        .fold(fermi, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1e-3);
    let x_max = edges.len() as f64;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Band Edges per k-point", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.5..(x_max + 0.5), (y_min - y_margin)..(y_max + y_margin))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("k-point")
        .y_desc(format!("Energy ({})", unit.label()))
        .draw()
        .map_err(plot_err)?;

    // 费米能水平线
    chart
        .draw_series(LineSeries::new(
            vec![(0.5, fermi), (x_max + 0.5, fermi)],
            BLACK.stroke_width(1),
        ))
        .map_err(plot_err)?
        .label("Fermi level")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(vbm_points.iter().copied(), BLUE.stroke_width(2)))
        .map_err(plot_err)?
        .label("Local VBM")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(
            vbm_points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(cbm_points.iter().copied(), RED.stroke_width(2)))
        .map_err(plot_err)?
        .label("Local CBM")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(
            cbm_points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, RED.filled())),
        )
        .map_err(plot_err)?;

    // 标记全局 VBM / CBM
    let position = |kpt: usize| {
        edges
            .iter()
            .position(|k| k.kpt == kpt)
            .map(|i| (i + 1) as f64)
    };
    let globals = [
        (summary.vbm.kpt, summary.vbm.energy),
        (summary.cbm.kpt, summary.cbm.energy),
    ];
    chart
        .draw_series(globals.iter().filter_map(|&(kpt, energy)| {
            position(kpt).map(|x| Circle::new((x, unit.from_hartree(energy)), 7, GREEN.filled()))
        }))
        .map_err(plot_err)?
        .label(format!("Global edges ({})", summary.nature()))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    Ok(())
}

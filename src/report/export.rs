//! # 带隙数据导出
//!
//! 导出逐 k 点 VBM/CBM 和批量带隙汇总到 CSV。
//!
//! ## 支持格式
//! - 逐 k 点 CSV: kpt_index, nband, vbm_band, vbm_energy_hartree, cbm_band, cbm_energy_hartree
//! - 批量汇总 CSV: 每个计算目录一行（serde 序列化）
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/batch.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{AbigapError, Result};
use crate::models::{FermiSelection, GapSummary, KPointEdges, HARTREE_TO_EV};

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// 逐 k 点 CSV 表头
pub const PER_KPOINT_HEADER: [&str; 6] = [
    "kpt_index",
    "nband",
    "vbm_band",
    "vbm_energy_hartree",
    "cbm_band",
    "cbm_energy_hartree",
];

/// 批量汇总中的一行
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub directory: String,
    pub log: String,
    pub eig: String,
    pub fermi_index: usize,
    pub fermi_hartree: f64,
    pub vbm_kpt: usize,
    pub vbm_band: usize,
    pub vbm_hartree: f64,
    pub cbm_kpt: usize,
    pub cbm_band: usize,
    pub cbm_hartree: f64,
    pub gap_hartree: f64,
    pub gap_ev: f64,
    pub direct: bool,
}

impl SummaryRow {
    pub fn new(
        directory: String,
        log: String,
        eig: String,
        fermi: &FermiSelection,
        summary: &GapSummary,
    ) -> Self {
        SummaryRow {
            directory,
            log,
            eig,
            fermi_index: fermi.index,
            fermi_hartree: fermi.energy,
            vbm_kpt: summary.vbm.kpt,
            vbm_band: summary.vbm.band,
            vbm_hartree: summary.vbm.energy,
            cbm_kpt: summary.cbm.kpt,
            cbm_band: summary.cbm.band,
            cbm_hartree: summary.cbm.energy,
            gap_hartree: summary.gap_hartree(),
            gap_ev: summary.gap_hartree() * HARTREE_TO_EV,
            direct: summary.is_direct(),
        }
    }
}

/// 逐 k 点 CSV 记录；缺失的能带边留空
fn per_kpoint_record(edges: &KPointEdges) -> [String; 6] {
    let vbm = edges.extrema.vbm;
    let cbm = edges.extrema.cbm;
    [
        edges.kpt.to_string(),
        edges.nband.to_string(),
        vbm.map(|e| e.band.to_string()).unwrap_or_default(),
        vbm.map(|e| e.energy.to_string()).unwrap_or_default(),
        cbm.map(|e| e.band.to_string()).unwrap_or_default(),
        cbm.map(|e| e.energy.to_string()).unwrap_or_default(),
    ]
}

/// 写入逐 k 点记录（含表头）
pub fn write_per_kpoint<W: Write>(edges: &[KPointEdges], wtr: &mut csv::Writer<W>) -> Result<()> {
    wtr.write_record(PER_KPOINT_HEADER)?;
    for e in edges {
        wtr.write_record(per_kpoint_record(e))?;
    }
    Ok(())
}

/// 导出逐 k 点 CSV 文件
pub fn per_kpoint_to_csv(edges: &[KPointEdges], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    write_per_kpoint(edges, &mut wtr)?;

    wtr.flush().map_err(|e| AbigapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出批量汇总 CSV 文件
pub fn summary_to_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| AbigapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BandEdge, GlobalEdge, LocalExtrema};

    #[test]
    fn test_per_kpoint_csv_blank_edges() {
        let edges = vec![
            KPointEdges {
                kpt: 1,
                nband: 2,
                extrema: LocalExtrema {
                    vbm: Some(BandEdge { band: 2, energy: -0.2 }),
                    cbm: None,
                },
            },
            KPointEdges {
                kpt: 2,
                nband: 2,
                extrema: LocalExtrema {
                    vbm: Some(BandEdge { band: 1, energy: -0.1 }),
                    cbm: Some(BandEdge { band: 2, energy: 0.3 }),
                },
            },
        ];

        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_per_kpoint(&edges, &mut wtr).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "kpt_index,nband,vbm_band,vbm_energy_hartree,cbm_band,cbm_energy_hartree"
        );
        assert_eq!(lines[1], "1,2,2,-0.2,,");
        assert_eq!(lines[2], "2,2,1,-0.1,2,0.3");
    }

    #[test]
    fn test_summary_row() {
        let fermi = FermiSelection {
            index: 1,
            energy: 0.0,
        };
        let summary = GapSummary {
            vbm: GlobalEdge { kpt: 1, band: 4, energy: -0.05 },
            cbm: GlobalEdge { kpt: 2, band: 5, energy: 0.2 },
        };
        let row = SummaryRow::new("si".into(), "ab.abo".into(), "abo_EIG".into(), &fermi, &summary);
        assert!((row.gap_hartree - 0.25).abs() < 1e-12);
        assert!((row.gap_ev - 0.25 * HARTREE_TO_EV).abs() < 1e-9);
        assert!(!row.direct);
    }
}

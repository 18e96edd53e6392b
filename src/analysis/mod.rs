//! # 带隙分析模块
//!
//! 把 k 点本征值与选定的费米能组合成局部极值和全局带隙。
//!
//! ## 流程
//! ```text
//! KPointBlock ──classify──> KPointEdges ──aggregate──> GapSummary
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/batch.rs` 使用
//! - 使用 `models/`
//! - 子模块: classify, gap

pub mod classify;
pub mod gap;

pub use classify::{local_extrema, partition_bands, BandPartition};
pub use gap::aggregate_gap;

use crate::error::Result;
use crate::models::{GapSummary, KPointBlock, KPointEdges};

/// 带隙分析结果：逐 k 点极值与全局汇总
#[derive(Debug, Clone)]
pub struct GapAnalysis {
    pub per_kpoint: Vec<KPointEdges>,
    pub summary: GapSummary,
}

/// 逐 k 点计算局部极值
pub fn classify_kpoints(kpoints: &[KPointBlock], fermi: f64, tol: f64) -> Vec<KPointEdges> {
    kpoints
        .iter()
        .map(|k| KPointEdges {
            kpt: k.index,
            nband: k.nband,
            extrema: local_extrema(&k.energies, fermi, tol),
        })
        .collect()
}

/// 完整的分类 + 汇总流程
pub fn analyze(kpoints: &[KPointBlock], fermi: f64, tol: f64) -> Result<GapAnalysis> {
    let per_kpoint = classify_kpoints(kpoints, fermi, tol);
    let summary = aggregate_gap(&per_kpoint)?;
    Ok(GapAnalysis {
        per_kpoint,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbigapError;
    use crate::models::{EnergyUnit, GlobalEdge};
    use crate::parsers::eig::parse_eig_content;

    #[test]
    fn test_direct_gap_at_second_kpoint() {
        let kpoints = vec![
            KPointBlock::new(1, 2, vec![-0.5, -0.2]),
            KPointBlock::new(2, 2, vec![-0.1, 0.3]),
        ];
        let result = analyze(&kpoints, 0.0, 1e-6).unwrap();

        assert_eq!(result.per_kpoint[0].extrema.cbm, None);
        assert_eq!(
            result.summary.vbm,
            GlobalEdge { kpt: 2, band: 1, energy: -0.1 }
        );
        assert_eq!(
            result.summary.cbm,
            GlobalEdge { kpt: 2, band: 2, energy: 0.3 }
        );
        assert!(result.summary.is_direct());
        assert!((result.summary.gap_hartree() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_indirect_gap() {
        let kpoints = vec![
            KPointBlock::new(1, 2, vec![-0.05, 0.5]),
            KPointBlock::new(2, 2, vec![-0.3, 0.2]),
        ];
        let result = analyze(&kpoints, 0.0, 1e-6).unwrap();

        assert_eq!(result.summary.vbm.kpt, 1);
        assert_eq!(result.summary.vbm.energy, -0.05);
        assert_eq!(result.summary.cbm.kpt, 2);
        assert_eq!(result.summary.cbm.energy, 0.2);
        assert!((result.summary.gap_hartree() - 0.25).abs() < 1e-12);
        assert!(!result.summary.is_direct());
        assert_eq!(result.summary.nature(), "indirect");
    }

    #[test]
    fn test_gap_in_ev() {
        let kpoints = vec![KPointBlock::new(1, 2, vec![0.0, 1.0])];
        let result = analyze(&kpoints, 0.0, 1e-6).unwrap();
        let gap_ev = EnergyUnit::Ev.from_hartree(result.summary.gap_hartree());
        assert_eq!(format!("{:.12}", gap_ev), "27.211386245988");
    }

    #[test]
    fn test_wrong_fermi_is_aggregation_error() {
        let kpoints = vec![
            KPointBlock::new(1, 2, vec![-0.5, -0.2]),
            KPointBlock::new(2, 2, vec![-0.1, 0.3]),
        ];
        let err = analyze(&kpoints, 10.0, 1e-6).unwrap_err();
        assert!(matches!(err, AbigapError::GapUndetermined { edge: "CBM" }));
    }

    #[test]
    fn test_pipeline_from_eig_text() {
        let content = r#" Eigenvalues (hartree) for nkpt=   2  k points:
 kpt#   1, nband=  6, wtk=  0.25000, kpt=  0.0000  0.0000  0.0000 (reduced coord)
  -0.21190   0.19616   0.19616   0.19616   0.27547
   0.27547
 kpt#   2, nband=  6, wtk=  0.75000, kpt=  0.5000  0.0000  0.0000 (reduced coord)
  -0.16342  -0.00962   0.14279   0.14279   0.24110
   0.38021
"#;
        let kpoints = parse_eig_content(content).unwrap();
        let result = analyze(&kpoints, 0.19616, 1e-6).unwrap();

        assert_eq!(result.summary.vbm, GlobalEdge { kpt: 1, band: 2, energy: 0.19616 });
        assert_eq!(result.summary.cbm, GlobalEdge { kpt: 2, band: 5, energy: 0.24110 });
        assert!(!result.summary.is_direct());
    }
}

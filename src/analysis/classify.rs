//! # 能带占据分类
//!
//! 以 `E_f + τ` 为唯一阈值划分占据/非占据能带：
//! - 占据: `energy <= E_f + τ`
//! - 非占据: `energy > E_f + τ`
//!
//! 容差只会把能带从非占据移入占据，不会反向移动。
//!
//! ## 依赖关系
//! - 被 `analysis/mod.rs` 使用
//! - 使用 `models/bands.rs`

use crate::models::{BandEdge, LocalExtrema};

/// 占据/非占据划分结果（1-based 能带编号）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandPartition {
    pub occupied: Vec<usize>,
    pub unoccupied: Vec<usize>,
}

/// 划分能带
pub fn partition_bands(energies: &[f64], fermi: f64, tol: f64) -> BandPartition {
    let threshold = fermi + tol;
    let mut partition = BandPartition::default();

    for (i, &e) in energies.iter().enumerate() {
        if e <= threshold {
            partition.occupied.push(i + 1);
        } else {
            partition.unoccupied.push(i + 1);
        }
    }

    partition
}

/// 计算单个 k 点的局部 VBM/CBM
///
/// 能量相同时取第一个出现的能带。
pub fn local_extrema(energies: &[f64], fermi: f64, tol: f64) -> LocalExtrema {
    let threshold = fermi + tol;
    let mut extrema = LocalExtrema::default();

    for (i, &energy) in energies.iter().enumerate() {
        let edge = BandEdge { band: i + 1, energy };
        if energy <= threshold {
            if extrema.vbm.map_or(true, |v| energy > v.energy) {
                extrema.vbm = Some(edge);
            }
        } else if extrema.cbm.map_or(true, |c| energy < c.energy) {
            extrema.cbm = Some(edge);
        }
    }

    extrema
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLS: [f64; 6] = [0.0, 1e-8, 1e-6, 1e-3, 0.05, 0.5];

    fn sample_bands() -> Vec<Vec<f64>> {
        vec![
            vec![-0.21190, 0.19616, 0.19616, 0.19616, 0.27547, 0.27547, 0.31010],
            vec![-0.5, -0.2],
            vec![0.1, 0.3],
            vec![0.0, 0.0, 1e-7, 2e-6, -1e-9],
            vec![],
        ]
    }

    #[test]
    fn test_partition_disjoint_and_complete() {
        for bands in sample_bands() {
            for &fermi in &[-0.3, 0.0, 0.19616, 0.25] {
                for &tol in &TOLS {
                    let p = partition_bands(&bands, fermi, tol);
                    let mut all: Vec<usize> =
                        p.occupied.iter().chain(&p.unoccupied).copied().collect();
                    all.sort_unstable();
                    let expected: Vec<usize> = (1..=bands.len()).collect();
                    assert_eq!(all, expected);
                    assert!(p.occupied.iter().all(|b| !p.unoccupied.contains(b)));
                }
            }
        }
    }

    #[test]
    fn test_tolerance_only_widens_occupied() {
        for bands in sample_bands() {
            for w in TOLS.windows(2) {
                let narrow = partition_bands(&bands, 0.0, w[0]);
                let wide = partition_bands(&bands, 0.0, w[1]);
                assert!(narrow.occupied.iter().all(|b| wide.occupied.contains(b)));
            }
        }
    }

    #[test]
    fn test_degenerate_at_fermi_is_occupied() {
        let bands = [-0.1, 0.19616, 0.19616, 0.3];
        let ext = local_extrema(&bands, 0.19616, 0.0);
        // 简并时取第一个
        assert_eq!(ext.vbm, Some(BandEdge { band: 2, energy: 0.19616 }));
        assert_eq!(ext.cbm, Some(BandEdge { band: 4, energy: 0.3 }));
    }

    #[test]
    fn test_band_just_above_fermi_moves_with_tolerance() {
        let bands = [-0.2, 5e-7, 0.4];
        let strict = local_extrema(&bands, 0.0, 1e-8);
        assert_eq!(strict.vbm.map(|e| e.band), Some(1));
        assert_eq!(strict.cbm.map(|e| e.band), Some(2));

        let loose = local_extrema(&bands, 0.0, 1e-6);
        assert_eq!(loose.vbm.map(|e| e.band), Some(2));
        assert_eq!(loose.cbm.map(|e| e.band), Some(3));
    }

    #[test]
    fn test_cbm_tie_takes_first() {
        let bands = [-0.1, 0.3, 0.2, 0.2];
        let ext = local_extrema(&bands, 0.0, 1e-6);
        assert_eq!(ext.cbm, Some(BandEdge { band: 3, energy: 0.2 }));
    }

    #[test]
    fn test_fully_occupied_has_no_cbm() {
        let ext = local_extrema(&[-0.5, -0.2], 0.0, 1e-6);
        assert_eq!(ext.vbm, Some(BandEdge { band: 2, energy: -0.2 }));
        assert_eq!(ext.cbm, None);
    }

    #[test]
    fn test_fully_empty_has_no_vbm() {
        let ext = local_extrema(&[0.1, 0.3], 0.0, 1e-6);
        assert_eq!(ext.vbm, None);
        assert_eq!(ext.cbm, Some(BandEdge { band: 1, energy: 0.1 }));
    }

    #[test]
    fn test_extrema_agree_with_partition() {
        for bands in sample_bands() {
            for &tol in &TOLS {
                let p = partition_bands(&bands, 0.0, tol);
                let ext = local_extrema(&bands, 0.0, tol);
                assert_eq!(ext.vbm.is_some(), !p.occupied.is_empty());
                assert_eq!(ext.cbm.is_some(), !p.unoccupied.is_empty());
                if let Some(v) = ext.vbm {
                    assert!(p.occupied.contains(&v.band));
                }
                if let Some(c) = ext.cbm {
                    assert!(p.unoccupied.contains(&c.band));
                }
            }
        }
    }
}

//! # 全局带隙汇总
//!
//! 在所有 k 点的局部极值中取最大 VBM 与最小 CBM，得到带隙并判断直接/间接。
//!
//! ## 依赖关系
//! - 被 `analysis/mod.rs` 使用
//! - 使用 `models/bands.rs`

use crate::error::{AbigapError, Result};
use crate::models::{GapSummary, GlobalEdge, KPointEdges};

/// 汇总全局 VBM/CBM
///
/// 能量相同时保留先出现的 k 点。
pub fn aggregate_gap(edges: &[KPointEdges]) -> Result<GapSummary> {
    let mut vbm: Option<GlobalEdge> = None;
    let mut cbm: Option<GlobalEdge> = None;

    for k in edges {
        if let Some(v) = k.extrema.vbm {
            if vbm.map_or(true, |g| v.energy > g.energy) {
                vbm = Some(GlobalEdge {
                    kpt: k.kpt,
                    band: v.band,
                    energy: v.energy,
                });
            }
        }
        if let Some(c) = k.extrema.cbm {
            if cbm.map_or(true, |g| c.energy < g.energy) {
                cbm = Some(GlobalEdge {
                    kpt: k.kpt,
                    band: c.band,
                    energy: c.energy,
                });
            }
        }
    }

    let vbm = vbm.ok_or(AbigapError::GapUndetermined { edge: "VBM" })?;
    let cbm = cbm.ok_or(AbigapError::GapUndetermined { edge: "CBM" })?;

    Ok(GapSummary { vbm, cbm })
}

//! # 能带边数据模型
//!
//! 单个 k 点的局部 VBM/CBM 以及全局带隙汇总。
//!
//! ## 依赖关系
//! - 被 `analysis/classify.rs`, `analysis/gap.rs` 构造
//! - 被 `report/` 和 `commands/` 使用

use serde::{Deserialize, Serialize};

/// 某一 k 点上的能带边：(能带编号, 能量)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandEdge {
    /// 1-based 能带编号
    pub band: usize,
    /// 能量 (hartree)
    pub energy: f64,
}

/// 单个 k 点的局部极值
///
/// 全占据时没有 CBM，全空时没有 VBM，两者均为合法状态。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalExtrema {
    pub vbm: Option<BandEdge>,
    pub cbm: Option<BandEdge>,
}

/// k 点编号与其局部极值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPointEdges {
    pub kpt: usize,
    pub nband: usize,
    pub extrema: LocalExtrema,
}

/// 全局能带边：(k 点, 能带, 能量)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalEdge {
    pub kpt: usize,
    pub band: usize,
    pub energy: f64,
}

/// 全局带隙结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub vbm: GlobalEdge,
    pub cbm: GlobalEdge,
}

impl GapSummary {
    /// 带隙 (hartree) = CBM - VBM
    pub fn gap_hartree(&self) -> f64 {
        self.cbm.energy - self.vbm.energy
    }

    /// VBM 与 CBM 位于同一 k 点即为直接带隙
    pub fn is_direct(&self) -> bool {
        self.vbm.kpt == self.cbm.kpt
    }

    /// "direct" 或 "indirect"
    pub fn nature(&self) -> &'static str {
        if self.is_direct() {
            "direct"
        } else {
            "indirect"
        }
    }
}

/// 选定的费米能
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FermiSelection {
    /// 在日志中的 0-based 序号
    pub index: usize,
    /// 能量 (hartree)
    pub energy: f64,
}

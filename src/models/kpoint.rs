//! # k 点本征值数据模型
//!
//! 存储 ABINIT `_EIG` 文件中单个 k 点的能带本征值。
//!
//! ## 依赖关系
//! - 被 `parsers/eig.rs` 构造
//! - 被 `analysis/` 使用

use serde::{Deserialize, Serialize};

/// 单个 k 点的本征值块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPointBlock {
    /// 文件中报告的 k 点编号（不保证连续）
    pub index: usize,

    /// 头部声明的能带数
    pub nband: usize,

    /// 能带本征值 (hartree)，按能带顺序，长度恒等于 `nband`
    pub energies: Vec<f64>,

    /// k 点权重 `wtk`（若头部给出）
    pub weight: Option<f64>,

    /// 约化坐标 `kpt=`（若头部给出）
    pub coords: Option<[f64; 3]>,
}

impl KPointBlock {
    pub fn new(index: usize, nband: usize, energies: Vec<f64>) -> Self {
        KPointBlock {
            index,
            nband,
            energies,
            weight: None,
            coords: None,
        }
    }

    /// 坐标的紧凑显示形式
    pub fn coords_label(&self) -> String {
        match self.coords {
            Some([x, y, z]) => format!("({:.4}, {:.4}, {:.4})", x, y, z),
            None => "-".to_string(),
        }
    }
}

//! # 数据模型模块
//!
//! 定义 k 点本征值、能带边和能量单位的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/` 和 `commands/` 使用
//! - 子模块: kpoint, bands, units

pub mod bands;
pub mod kpoint;
pub mod units;

pub use bands::{BandEdge, FermiSelection, GapSummary, GlobalEdge, KPointEdges, LocalExtrema};
pub use kpoint::KPointBlock;
pub use units::{format_sci, EnergyUnit, HARTREE_TO_EV};

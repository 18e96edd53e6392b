//! # 报告输出模块
//!
//! 带隙结果的 CSV 导出与能带边绘图。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 数据模型
//! - 子模块: export, plot

pub mod export;
pub mod plot;

pub use export::{per_kpoint_to_csv, summary_to_csv, SummaryRow};
pub use plot::plot_band_edges;

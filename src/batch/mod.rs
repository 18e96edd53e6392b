//! # 批量处理模块
//!
//! 对多个计算目录并行求带隙，每个目录是一次独立运行。
//!
//! ## 功能
//! - 收集日志 / `_EIG` 文件对
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{CalculationPair, PairCollector, PairScan};
pub use runner::{BatchResult, BatchRunner, ProcessResult};

//! # 统一错误处理模块
//!
//! 定义 abigap 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// abigap 统一错误类型
#[derive(Error, Debug)]
pub enum AbigapError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("No 'fermie' entries found in '{path}'")]
    NoFermiEnergy { path: String },

    #[error("No k-points parsed from '{path}'; check file format")]
    NoKPoints { path: String },

    #[error(
        "Expected {expected} eigenvalues for kpt {kpt}, found {found}. Check file format or nband parsing"
    )]
    BandCountMismatch {
        kpt: usize,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 选择与汇总错误
    // ─────────────────────────────────────────────────────────────
    #[error("Fermi index {} out of range (0..{})", .index, .available.saturating_sub(1))]
    FermiIndexOutOfRange { index: usize, available: usize },

    #[error("Could not determine global {edge}. Check eigenvalues, Fermi energy and tolerance")]
    GapUndetermined { edge: &'static str },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AbigapError>;

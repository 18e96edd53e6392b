//! # 计算目录收集器
//!
//! 在输入目录下查找成对的 ABINIT 日志与 `_EIG` 文件。
//!
//! ## 功能
//! - glob 模式匹配日志 (`*.abo`) 和本征值文件 (`*_EIG`)
//! - 按所在目录配对：取名称排序后的第一个日志与最后一个 `_EIG`（最高数据集）
//! - 只有其中一种文件的目录记为不完整
//! - 可选递归搜索
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{AbigapError, Result};

use glob::Pattern;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 一次计算的日志 / `_EIG` 文件对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationPair {
    pub dir: PathBuf,
    pub log: PathBuf,
    pub eig: PathBuf,
}

impl CalculationPair {
    /// 用于显示的目录名
    pub fn name(&self) -> String {
        self.dir.display().to_string()
    }
}

/// 扫描结果
#[derive(Debug, Default)]
pub struct PairScan {
    pub pairs: Vec<CalculationPair>,
    /// 只找到日志或只找到 `_EIG` 的目录
    pub incomplete: Vec<PathBuf>,
}

/// 文件对收集器
pub struct PairCollector {
    /// 输入目录
    root: PathBuf,
    log_pattern: Pattern,
    eig_pattern: Pattern,
    /// 是否递归
    recursive: bool,
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| AbigapError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

impl PairCollector {
    /// 创建新的收集器（日志 `*.abo`，本征值 `*_EIG`）
    pub fn new(root: PathBuf, log_pattern: &str, eig_pattern: &str) -> Result<Self> {
        Ok(Self {
            root,
            log_pattern: compile_pattern(log_pattern)?,
            eig_pattern: compile_pattern(eig_pattern)?,
            recursive: false,
        })
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有文件对
    ///
    /// 非递归时只看输入目录本身及其直接子目录。
    pub fn collect(&self) -> PairScan {
        let max_depth = if self.recursive { usize::MAX } else { 2 };

        let files = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path());

        self.pair_files(files)
    }

    /// 按目录配对文件
    fn pair_files<I: IntoIterator<Item = PathBuf>>(&self, files: I) -> PairScan {
        let mut by_dir: BTreeMap<PathBuf, (Vec<PathBuf>, Vec<PathBuf>)> = BTreeMap::new();

        for path in files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

            // 同时匹配两种模式时按 `_EIG` 处理
            if self.eig_pattern.matches(name) {
                by_dir.entry(dir).or_default().1.push(path);
            } else if self.log_pattern.matches(name) {
                by_dir.entry(dir).or_default().0.push(path);
            }
        }

        let mut scan = PairScan::default();
        for (dir, (mut logs, mut eigs)) in by_dir {
            logs.sort();
            eigs.sort();
            match (logs.into_iter().next(), eigs.pop()) {
                (Some(log), Some(eig)) => scan.pairs.push(CalculationPair { dir, log, eig }),
                _ => scan.incomplete.push(dir),
            }
        }

        scan
    }
}

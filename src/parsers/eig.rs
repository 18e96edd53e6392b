//! # ABINIT `_EIG` 本征值文件解析器
//!
//! 解析按 k 点组织的 ASCII 本征值列表。
//!
//! ## 格式说明
//! ```text
//!  Fermi (or HOMO) energy (hartree) =   0.19616   Average Vxc (hartree)=  -0.34612
//!  Eigenvalues (hartree) for nkpt=   2  k points:
//!  kpt#   1, nband=  8, wtk=  0.50000, kpt=  0.0000  0.0000  0.0000 (reduced coord)
//!   -0.21190   0.19616   0.19616   0.19616   0.27547
//!    0.27547   0.27547   0.31010
//!  kpt#   2, nband=  8, wtk=  0.50000, kpt=  0.5000  0.0000  0.0000 (reduced coord)
//!  ...
//! ```
//!
//! 头部之后的数值按个数累计，恰好收集 `nband` 个即结束该块；
//! 块边界只由计数决定，不依赖空行或下一个头部。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/batch.rs` 使用
//! - 使用 `models/kpoint.rs`

use crate::error::{AbigapError, Result};
use crate::models::KPointBlock;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)kpt#\s*(\d+)\s*,\s*nband\s*=\s*(\d+)").expect("header pattern is valid")
    })
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?")
            .expect("number pattern is valid")
    })
}

fn weight_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)wtk\s*=\s*([+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?)")
            .expect("wtk pattern is valid")
    })
}

fn coords_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let num = r"([+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?)";
        Regex::new(&format!(r"(?i)\bkpt\s*=\s*{num}\s+{num}\s+{num}"))
            .expect("kpt coordinate pattern is valid")
    })
}

/// 解析 `_EIG` 文件
pub fn parse_eig_file(path: &Path) -> Result<Vec<KPointBlock>> {
    let bytes = fs::read(path).map_err(|e| AbigapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let blocks = parse_eig_content(&String::from_utf8_lossy(&bytes))?;
    if blocks.is_empty() {
        return Err(AbigapError::NoKPoints {
            path: path.display().to_string(),
        });
    }

    Ok(blocks)
}

/// 从字符串内容解析所有 k 点块，保持头部顺序
pub fn parse_eig_content(content: &str) -> Result<Vec<KPointBlock>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let Some((index, nband)) = parse_header(lines[i])? else {
            i += 1;
            continue;
        };

        // nband 来自文件，不能据此预分配
        let mut energies: Vec<f64> = Vec::new();
        let mut j = i + 1;
        while j < lines.len() && energies.len() < nband {
            energies.extend(extract_numbers(lines[j]));
            j += 1;
        }

        // 不足（文件提前结束）或多出（末行携带额外数值）均视为结构错误
        if energies.len() != nband {
            return Err(AbigapError::BandCountMismatch {
                kpt: index,
                expected: nband,
                found: energies.len(),
            });
        }

        let mut block = KPointBlock::new(index, nband, energies);
        block.weight = parse_weight(lines[i]);
        block.coords = parse_coords(lines[i]);
        blocks.push(block);

        i = j;
    }

    Ok(blocks)
}

/// 匹配 `kpt# <int>, nband=<int>` 头部
fn parse_header(line: &str) -> Result<Option<(usize, usize)>> {
    let Some(caps) = header_regex().captures(line) else {
        return Ok(None);
    };

    let parse = |s: &str| {
        s.parse::<usize>().map_err(|e| AbigapError::ParseError {
            format: "EIG".to_string(),
            path: "<content>".to_string(),
            reason: format!("Invalid integer '{}' in header '{}': {}", s, line.trim(), e),
        })
    };

    let index = parse(&caps[1])?;
    let nband = parse(&caps[2])?;
    Ok(Some((index, nband)))
}

/// 提取一行中的全部浮点数
fn extract_numbers(line: &str) -> impl Iterator<Item = f64> + '_ {
    number_regex()
        .find_iter(line)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
}

fn parse_weight(line: &str) -> Option<f64> {
    weight_regex().captures(line)?.get(1)?.as_str().parse().ok()
}

fn parse_coords(line: &str) -> Option<[f64; 3]> {
    let caps = coords_regex().captures(line)?;
    let x = caps.get(1)?.as_str().parse().ok()?;
    let y = caps.get(2)?.as_str().parse().ok()?;
    let z = caps.get(3)?.as_str().parse().ok()?;
    Some([x, y, z])
}

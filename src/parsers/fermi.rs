//! # ABINIT 日志费米能解析器
//!
//! 从 `.abo` 日志中按出现顺序提取所有 `fermie` 赋值。
//!
//! ## 格式说明
//! ```text
//!  fermie  =  2.57164E-01
//!  ... fermie: -0.0123 ...
//! ```
//! 不区分大小写，每行只取第一个匹配。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/fermi.rs`, `commands/batch.rs` 使用
//! - 使用 `models/bands.rs` 的 FermiSelection

use crate::error::{AbigapError, Result};
use crate::models::FermiSelection;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn fermie_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)fermie\s*[:=]\s*([+-]?[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?)")
            .expect("fermie pattern is valid")
    })
}

/// 解析日志文件，返回全部费米能 (hartree)
pub fn parse_fermi_file(path: &Path) -> Result<Vec<f64>> {
    let bytes = fs::read(path).map_err(|e| AbigapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    // 日志中可能混有非 UTF-8 字节
    Ok(parse_fermi_content(&String::from_utf8_lossy(&bytes)))
}

/// 从字符串内容提取费米能，保持文件顺序
pub fn parse_fermi_content(content: &str) -> Vec<f64> {
    content
        .lines()
        .filter_map(|line| fermie_regex().captures(line))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .collect()
}

/// 按序号选择费米能，缺省取最后一个
pub fn select_fermi(energies: &[f64], index: Option<usize>) -> Result<FermiSelection> {
    let last = energies.len().checked_sub(1).ok_or_else(|| {
        AbigapError::NoFermiEnergy {
            path: "<log>".to_string(),
        }
    })?;

    let index = index.unwrap_or(last);
    let energy = *energies
        .get(index)
        .ok_or(AbigapError::FermiIndexOutOfRange {
            index,
            available: energies.len(),
        })?;

    Ok(FermiSelection { index, energy })
}

/// 读取日志并完成选择；日志中没有费米能时报告文件路径
pub fn load_fermi(path: &Path, index: Option<usize>) -> Result<(Vec<f64>, FermiSelection)> {
    let energies = parse_fermi_file(path)?;
    if energies.is_empty() {
        return Err(AbigapError::NoFermiEnergy {
            path: path.display().to_string(),
        });
    }
    let selection = select_fermi(&energies, index)?;
    Ok((energies, selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fermi_in_order() {
        let content = r#"
 ================================================================================
 ETOT  1  -8.8621368555     -8.862E+00 3.013E-04 1.214E+00
 Fermi (or HOMO) energy (hartree) =   0.19616   Average Vxc (hartree)=  -0.34612
 fermie  =  1.96160E-01
 some unrelated line = 3.0
       fermie=   -0.0123
 FERMIE: 2.5e-1
"#;
        let energies = parse_fermi_content(content);
        assert_eq!(energies, vec![0.19616, -0.0123, 0.25]);
    }

    #[test]
    fn test_first_match_per_line() {
        let energies = parse_fermi_content("fermie = 0.1  fermie = 0.2\n");
        assert_eq!(energies, vec![0.1]);
    }

    #[test]
    fn test_no_fermie_is_empty() {
        let energies = parse_fermi_content("etotal = -8.86\nnband = 8\n");
        assert!(energies.is_empty());
        assert!(matches!(
            select_fermi(&energies, None),
            Err(AbigapError::NoFermiEnergy { .. })
        ));
    }

    #[test]
    fn test_select_default_is_last() {
        let sel = select_fermi(&[0.1, 0.2, 0.3], None).unwrap();
        assert_eq!(sel.index, 2);
        assert_eq!(sel.energy, 0.3);
    }

    #[test]
    fn test_select_explicit_index() {
        let sel = select_fermi(&[0.1, 0.2, 0.3], Some(0)).unwrap();
        assert_eq!(sel.index, 0);
        assert_eq!(sel.energy, 0.1);
    }

    #[test]
    fn test_select_out_of_range() {
        let err = select_fermi(&[0.1, 0.2], Some(2)).unwrap_err();
        match err {
            AbigapError::FermiIndexOutOfRange { index, available } => {
                assert_eq!(index, 2);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            select_fermi(&[0.1, 0.2], Some(5)).unwrap_err().to_string(),
            "Fermi index 5 out of range (0..1)"
        );
    }
}

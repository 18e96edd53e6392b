//! # 解析器模块
//!
//! 提供 ABINIT 输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: fermi (日志 `fermie`), eig (`_EIG` 本征值列表)

pub mod eig;
pub mod fermi;

use crate::error::Result;
use crate::models::{FermiSelection, KPointBlock};
use std::path::Path;

/// 一次计算的全部输入：费米能列表、选定的费米能和 k 点块
#[derive(Debug, Clone)]
pub struct CalculationInput {
    pub fermi_energies: Vec<f64>,
    pub fermi: FermiSelection,
    pub kpoints: Vec<KPointBlock>,
}

/// 读取一对日志 / `_EIG` 文件
///
/// 先读日志：没有费米能时不再解析本征值文件。
pub fn load_calculation(
    log_path: &Path,
    eig_path: &Path,
    fermi_index: Option<usize>,
) -> Result<CalculationInput> {
    let (fermi_energies, fermi) = fermi::load_fermi(log_path, fermi_index)?;
    let kpoints = eig::parse_eig_file(eig_path)?;

    Ok(CalculationInput {
        fermi_energies,
        fermi,
        kpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbigapError;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("abigap-parsers-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_calculation() {
        let log = write_temp("ok.abo", " fermie  =  1.0E-01\n fermie  =  0.0\n");
        let eig = write_temp("ok_EIG", " kpt#   1, nband=  2, wtk=  1.00000\n -0.1 0.3\n");

        let input = load_calculation(&log, &eig, None).unwrap();
        assert_eq!(input.fermi_energies, vec![0.1, 0.0]);
        assert_eq!(input.fermi.index, 1);
        assert_eq!(input.kpoints.len(), 1);
        assert_eq!(input.kpoints[0].weight, Some(1.0));
    }

    #[test]
    fn test_log_without_fermie() {
        let log = write_temp("empty.abo", " etotal = -8.86\n");
        let eig = write_temp("unused_EIG", " kpt#   1, nband=  1\n 0.0\n");

        let err = load_calculation(&log, &eig, None).unwrap_err();
        match err {
            AbigapError::NoFermiEnergy { path } => assert!(path.ends_with("empty.abo")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_eig_without_kpoints() {
        let log = write_temp("nok.abo", " fermie = 0.0\n");
        let eig = write_temp("nok_EIG", " Eigenvalues (hartree) for nkpt=   0  k points:\n");

        assert!(matches!(
            load_calculation(&log, &eig, None),
            Err(AbigapError::NoKPoints { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let missing = std::env::temp_dir().join("abigap-definitely-missing.abo");
        assert!(matches!(
            load_calculation(&missing, &missing, None),
            Err(AbigapError::FileReadError { .. })
        ));
    }
}

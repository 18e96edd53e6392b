//! # fermi 命令实现
//!
//! 列出日志中出现的全部费米能，标记缺省选择（最后一个）。
//!
//! ## 依赖关系
//! - 使用 `cli/fermi.rs` 定义的参数
//! - 使用 `parsers/fermi.rs`
//! - 使用 `utils/output.rs`

use super::ensure_file;
use crate::cli::fermi::FermiArgs;
use crate::error::{AbigapError, Result};
use crate::models::{format_sci, HARTREE_TO_EV};
use crate::parsers::fermi;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 费米能表格行
#[derive(Debug, Clone, Tabled)]
struct FermiRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "fermie (hartree)")]
    hartree: String,
    #[tabled(rename = "fermie (eV)")]
    ev: String,
    #[tabled(rename = "Default")]
    default: String,
}

/// 执行 fermi 命令
pub fn execute(args: FermiArgs) -> Result<()> {
    output::print_header("Fermi Energies");
    ensure_file(&args.log)?;

    let energies = fermi::parse_fermi_file(&args.log)?;
    if energies.is_empty() {
        return Err(AbigapError::NoFermiEnergy {
            path: args.log.display().to_string(),
        });
    }

    output::print_info(&format!(
        "Found {} fermie entries in '{}'",
        energies.len(),
        args.log.display()
    ));

    let last = energies.len() - 1;
    let rows: Vec<FermiRow> = energies
        .iter()
        .enumerate()
        .map(|(i, &e)| FermiRow {
            index: i,
            hartree: format_sci(e, 8),
            ev: format!("{:.6}", e * HARTREE_TO_EV),
            default: if i == last { "*".to_string() } else { String::new() },
        })
        .collect();

    println!("{}", Table::new(&rows));

    Ok(())
}

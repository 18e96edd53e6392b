//! # 能量单位
//!
//! 内部计算统一使用 hartree，eV 仅用于显示。
//!
//! ## 依赖关系
//! - 被 `analysis/`, `report/`, `commands/` 使用
//! - 被 `cli/` 用作 `--unit` 参数类型

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 1 hartree 对应的 eV 数 (CODATA 2018)
pub const HARTREE_TO_EV: f64 = 27.211386245988;

/// 科学计数法，指数至少两位（`2.50000000e-01`）
pub fn format_sci(value: f64, precision: usize) -> String {
    let s = format!("{:.*e}", precision, value);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

/// 显示用能量单位
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnergyUnit {
    /// Hartree (atomic units)
    Hartree,
    /// Electron volt
    #[default]
    Ev,
}

impl EnergyUnit {
    /// 将 hartree 转换为当前单位
    pub fn from_hartree(self, value: f64) -> f64 {
        match self {
            EnergyUnit::Hartree => value,
            EnergyUnit::Ev => value * HARTREE_TO_EV,
        }
    }

    /// 将当前单位的数值转换回 hartree
    pub fn to_hartree(self, value: f64) -> f64 {
        match self {
            EnergyUnit::Hartree => value,
            EnergyUnit::Ev => value / HARTREE_TO_EV,
        }
    }

    /// 单位标签
    pub fn label(self) -> &'static str {
        match self {
            EnergyUnit::Hartree => "hartree",
            EnergyUnit::Ev => "eV",
        }
    }

    /// 另一个单位（用于括号内的补充显示）
    pub fn other(self) -> EnergyUnit {
        match self {
            EnergyUnit::Hartree => EnergyUnit::Ev,
            EnergyUnit::Ev => EnergyUnit::Hartree,
        }
    }

    /// 按单位习惯格式化 hartree 数值
    pub fn format(self, value_hartree: f64) -> String {
        let v = self.from_hartree(value_hartree);
        match self {
            EnergyUnit::Hartree => format!("{} {}", format_sci(v, 8), self.label()),
            EnergyUnit::Ev => format!("{:.6} {}", v, self.label()),
        }
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

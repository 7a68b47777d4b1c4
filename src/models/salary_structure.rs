//! Salary structure model.
//!
//! A salary structure holds the full-month compensation components for an
//! employee along with the statutory deduction settings applied against
//! them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full-month compensation components and deduction settings.
///
/// All currency fields are non-negative amounts for a full (unprorated)
/// month. A structure is an immutable input to a computation; the core
/// never mutates it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     basic: Decimal::from(20000),
///     hra: Decimal::from(10000),
///     special_allowance: Decimal::from(5000),
///     pf_deduction: true,
///     professional_tax: Decimal::from(200),
///     tds: Decimal::from(1500),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Basic pay for a full month.
    pub basic: Decimal,
    /// House rent allowance for a full month.
    pub hra: Decimal,
    /// Special allowance for a full month.
    pub special_allowance: Decimal,
    /// Whether Provident Fund is deducted for this employee.
    #[serde(default)]
    pub pf_deduction: bool,
    /// Flat professional tax per month (not prorated).
    #[serde(default)]
    pub professional_tax: Decimal,
    /// Flat tax deducted at source per month (not prorated).
    #[serde(default)]
    pub tds: Decimal,
}

impl SalaryStructure {
    /// Returns an all-zero structure with every deduction disabled.
    pub fn zeroed() -> Self {
        Self {
            basic: Decimal::ZERO,
            hra: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            pf_deduction: false,
            professional_tax: Decimal::ZERO,
            tds: Decimal::ZERO,
        }
    }
}

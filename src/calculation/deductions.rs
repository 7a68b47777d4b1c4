//! Statutory deduction calculation functionality.
//!
//! This module computes statutory and contractual deductions from the
//! prorated earnings and the resolved salary structure. Deductions are
//! deliberately asymmetric with earnings: earnings are attendance-scaled,
//! deductions are period-flat, except Provident Fund which follows the
//! prorated basic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::earnings::round_currency;
use crate::models::SalaryStructure;

/// Returns the Provident Fund contribution rate (12% of earned basic).
pub fn pf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// The deduction breakdown for one employee in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Provident Fund on the prorated basic, zero unless enabled.
    pub pf: Decimal,
    /// Flat professional tax from the structure.
    pub professional_tax: Decimal,
    /// Flat tax deducted at source from the structure.
    pub tds: Decimal,
}

impl DeductionBreakdown {
    /// Returns the total deductions: the exact sum of the three fields.
    pub fn total(&self) -> Decimal {
        self.pf + self.professional_tax + self.tds
    }
}

/// Computes the deductions for a resolved structure and prorated basic.
///
/// Provident Fund is `round(earned_basic * 0.12)` when the structure's
/// `pf_deduction` flag is set, zero otherwise; it is computed on the
/// prorated basic, never on the full-month structural basic. Professional
/// tax and TDS are taken verbatim from the structure regardless of
/// attendance.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
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
///
/// let deductions = calculate_deductions(&structure, Decimal::from(10000));
/// assert_eq!(deductions.pf, Decimal::from(1200));
/// assert_eq!(deductions.total(), Decimal::from(2900));
/// ```
pub fn calculate_deductions(
    structure: &SalaryStructure,
    earned_basic: Decimal,
) -> DeductionBreakdown {
    let pf = if structure.pf_deduction {
        round_currency(earned_basic * pf_rate())
    } else {
        Decimal::ZERO
    };

    DeductionBreakdown {
        pf,
        professional_tax: structure.professional_tax,
        tds: structure.tds,
    }
}

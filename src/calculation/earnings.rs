//! Earnings proration functionality.
//!
//! This module scales the structural earnings components by an attendance
//! factor, rounding each component independently to the nearest whole
//! currency unit.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::SalaryStructure;

/// The prorated earnings components for one employee in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedComponents {
    /// Prorated basic pay.
    pub earned_basic: Decimal,
    /// Prorated house rent allowance.
    pub earned_hra: Decimal,
    /// Prorated special allowance.
    pub earned_special: Decimal,
}

impl EarnedComponents {
    /// Returns the gross earnings: the exact sum of the three components.
    pub fn gross(&self) -> Decimal {
        self.earned_basic + self.earned_hra + self.earned_special
    }
}

/// Rounds an amount half-up to the nearest whole currency unit.
///
/// Amounts in this domain are non-negative, so midpoint-away-from-zero is
/// half-up rounding.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Scales the structure's earnings components by the attendance factor.
///
/// Each component is multiplied by `factor` and rounded independently,
/// not as a pre-rounded sum, so the summed components may differ by up to
/// one unit from a directly scaled gross figure. That drift is accepted
/// for compatibility, not corrected. A factor above 1 (over-reported
/// attendance) is propagated without clamping.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::prorate_earnings;
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
/// let earned = prorate_earnings(&structure, Decimal::new(5, 1));
/// assert_eq!(earned.earned_basic, Decimal::from(10000));
/// assert_eq!(earned.gross(), Decimal::from(17500));
/// ```
pub fn prorate_earnings(structure: &SalaryStructure, factor: Decimal) -> EarnedComponents {
    EarnedComponents {
        earned_basic: round_currency(structure.basic * factor),
        earned_hra: round_currency(structure.hra * factor),
        earned_special: round_currency(structure.special_allowance * factor),
    }
}

//! Payroll output models.
//!
//! This module contains the [`PayrollRecord`] and [`PayrollSummary`] types
//! that capture the outputs of a payroll computation. Records are derived
//! fresh on every request and never persisted by this core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentStatus;

/// The attendance-weighted compensation breakdown for one employee in one
/// period.
///
/// Invariants upheld by construction:
/// - `gross_earnings = earned_basic + earned_hra + earned_special`
/// - `total_deductions = pf + professional_tax + tds`
/// - `net_salary = max(0, gross_earnings - total_deductions)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Days present in the period (half-days count 0.5).
    pub days_present: Decimal,
    /// `days_present / days_in_month`; not clamped when the log
    /// over-reports presence.
    pub attendance_factor: Decimal,
    /// Prorated basic pay, rounded half-up to the whole unit.
    pub earned_basic: Decimal,
    /// Prorated house rent allowance, rounded half-up.
    pub earned_hra: Decimal,
    /// Prorated special allowance, rounded half-up.
    pub earned_special: Decimal,
    /// Sum of the three earned components.
    pub gross_earnings: Decimal,
    /// Provident Fund on the prorated basic, zero unless enabled.
    pub pf: Decimal,
    /// Flat professional tax taken verbatim from the structure.
    pub professional_tax: Decimal,
    /// Flat tax deducted at source taken verbatim from the structure.
    pub tds: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross minus deductions, floored at zero.
    pub net_salary: Decimal,
    /// Classification of the employee at computation time.
    pub employment_status: EmploymentStatus,
}

/// Organization-level totals over the `Active` records of a period.
///
/// Terminated employees are excluded from every aggregate figure even
/// though their individual records still exist and are viewable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Total gross earnings across active employees.
    pub total_gross: Decimal,
    /// Total deductions across active employees.
    pub total_deductions: Decimal,
    /// Total net pay due across active employees.
    pub total_net_payable: Decimal,
    /// Number of active employees included in the totals.
    pub active_employee_count: u32,
}

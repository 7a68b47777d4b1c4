//! Payroll aggregation functionality.
//!
//! This module folds all per-employee payroll records for a period into
//! the organization-level totals used by reporting and the pay-run
//! workflow.

use rust_decimal::Decimal;

use crate::models::{EmploymentStatus, PayrollRecord, PayrollSummary};

/// Folds a period's payroll records into an organization-level summary.
///
/// Only records with `Active` employment status contribute to the totals
/// and the count. Terminated employees are excluded from every aggregate
/// figure even though their individual records still exist and remain
/// viewable.
///
/// The summary is fully deterministic for the same inputs and computed
/// without side effects, so a pay-run confirmation step can recompute it
/// freely before any confirm action.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use rust_decimal::Decimal;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.active_employee_count, 0);
/// assert_eq!(summary.total_net_payable, Decimal::ZERO);
/// ```
pub fn summarize(records: &[PayrollRecord]) -> PayrollSummary {
    let mut summary = PayrollSummary {
        total_gross: Decimal::ZERO,
        total_deductions: Decimal::ZERO,
        total_net_payable: Decimal::ZERO,
        active_employee_count: 0,
    };

    for record in records {
        if record.employment_status != EmploymentStatus::Active {
            continue;
        }
        summary.total_gross += record.gross_earnings;
        summary.total_deductions += record.total_deductions;
        summary.total_net_payable += record.net_salary;
        summary.active_employee_count += 1;
    }

    summary
}

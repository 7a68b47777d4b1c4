//! Payroll record building functionality.
//!
//! This module composes the leaf calculations into one immutable
//! per-employee result and maps a whole roster into the period's record
//! set.

use rust_decimal::Decimal;

use super::{
    aggregate_attendance, calculate_deductions, prorate_earnings, resolve_structure,
};
use crate::models::{AttendanceRecord, Employee, PayrollPeriod, PayrollRecord};

/// Builds the payroll record for one employee in one period.
///
/// Composition order: attendance aggregation, structure resolution,
/// earnings proration, deduction calculation, status classification.
/// Pure; the function never fails for well-typed inputs -- missing data
/// degrades to a zero-valued record.
///
/// The attendance factor is `days_present / days_in_month` and is not
/// clamped when the log over-reports presence; an inflated factor
/// propagates into the earnings exactly as computed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_payroll_record;
/// use payroll_engine::models::{Employee, PayrollPeriod};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Asha Rao".to_string(),
///     is_active: true,
///     department_id: None,
///     designation: String::new(),
///     salary_structure: None,
///     base_salary: None,
/// };
/// let period = PayrollPeriod::new(2026, 4).unwrap();
///
/// let record = build_payroll_record(&employee, &[], &period);
/// assert_eq!(record.net_salary, Decimal::ZERO);
/// ```
pub fn build_payroll_record(
    employee: &Employee,
    log: &[AttendanceRecord],
    period: &PayrollPeriod,
) -> PayrollRecord {
    let days_present = aggregate_attendance(log, &employee.id, period);
    let attendance_factor = days_present / Decimal::from(period.days_in_month());

    let resolved = resolve_structure(employee);
    let structure = resolved.structure();

    let earned = prorate_earnings(structure, attendance_factor);
    let deductions = calculate_deductions(structure, earned.earned_basic);

    let gross_earnings = earned.gross();
    let total_deductions = deductions.total();
    let net_salary = (gross_earnings - total_deductions).max(Decimal::ZERO);

    PayrollRecord {
        employee_id: employee.id.clone(),
        days_present,
        attendance_factor,
        earned_basic: earned.earned_basic,
        earned_hra: earned.earned_hra,
        earned_special: earned.earned_special,
        gross_earnings,
        pf: deductions.pf,
        professional_tax: deductions.professional_tax,
        tds: deductions.tds,
        total_deductions,
        net_salary,
        employment_status: employee.employment_status(),
    }
}

/// Computes the payroll records for a whole roster.
///
/// One record per roster entry, in roster order. Each employee's record
/// depends only on that employee's own attendance slice and structure;
/// no record depends on another's output.
pub fn compute_payroll(
    employees: &[Employee],
    log: &[AttendanceRecord],
    period: &PayrollPeriod,
) -> Vec<PayrollRecord> {
    employees
        .iter()
        .map(|employee| build_payroll_record(employee, log, period))
        .collect()
}

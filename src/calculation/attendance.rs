//! Attendance aggregation functionality.
//!
//! This module reduces an employee's attendance records for a target
//! month into a single days-present figure.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, PayrollPeriod};

/// Sums the days present for one employee within a period.
///
/// Records are filtered to those whose `employee_id` matches and whose
/// date falls within the period's year-month; among those, `Present`
/// contributes 1.0 day and `HalfDay` contributes 0.5 day. If two records
/// exist for the same employee and date (a malformed log), both are
/// summed; no deduplication is performed.
///
/// An empty result set yields 0, which is a valid, non-error outcome
/// (employee fully absent or newly joined).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, PayrollPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayrollPeriod::new(2026, 4).unwrap();
/// let log = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
///     status: AttendanceStatus::Present,
/// }];
///
/// assert_eq!(aggregate_attendance(&log, "emp_001", &period), Decimal::ONE);
/// assert_eq!(aggregate_attendance(&log, "emp_002", &period), Decimal::ZERO);
/// ```
pub fn aggregate_attendance(
    log: &[AttendanceRecord],
    employee_id: &str,
    period: &PayrollPeriod,
) -> Decimal {
    log.iter()
        .filter(|r| r.employee_id == employee_id && period.contains(r.date))
        .map(|r| r.status.day_credit())
        .sum()
}

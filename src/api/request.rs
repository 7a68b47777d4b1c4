//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/compute` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, PayrollPeriod, SalaryStructure,
};

/// Request body for the `/payroll/compute` endpoint.
///
/// Contains a consistent snapshot of the roster and attendance log plus
/// the target period. The caller is responsible for reading all input
/// collections from the same point in time; the core does not reconcile
/// inconsistently-timed reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee roster.
    pub employees: Vec<EmployeeRequest>,
    /// The full attendance log (records outside the period are ignored).
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
    /// The target payroll period.
    pub period: PeriodRequest,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the employee is currently employed.
    pub is_active: bool,
    /// Reference to the employee's department, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Role or designation label.
    #[serde(default)]
    pub designation: String,
    /// The employee's salary structure, if configured.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
    /// Flat monthly salary fallback.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

/// Attendance record information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded attendance status.
    pub status: AttendanceStatus,
}

/// Payroll period information in a payroll request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl PeriodRequest {
    /// Validates the request period into a domain [`PayrollPeriod`].
    pub fn into_period(self) -> EngineResult<PayrollPeriod> {
        PayrollPeriod::new(self.year, self.month)
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            is_active: req.is_active,
            department_id: req.department_id,
            designation: req.designation,
            salary_structure: req.salary_structure,
            base_salary: req.base_salary,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
        }
    }
}

//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum
//! for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryStructure;

/// Employment status as classified on a payroll record.
///
/// `OnLeave` is part of the declared state space used by the surrounding
/// system but is not derived by any classification rule; only `Active`
/// and `Terminated` are reachable from roster inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// The employee is actively employed and included in aggregates.
    Active,
    /// Declared but never derived from current inputs.
    OnLeave,
    /// The employee is no longer employed; excluded from aggregates.
    Terminated,
}

/// Represents an employee on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the employee is currently employed.
    pub is_active: bool,
    /// Reference to the employee's department, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Role or designation label (e.g., "Accounts Executive").
    #[serde(default)]
    pub designation: String,
    /// The employee's salary structure, if one has been configured.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
    /// Flat monthly salary used as a fallback when no structure exists.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

impl Employee {
    /// Classifies the employee's status for a payroll record.
    ///
    /// The only implemented rule is the active flag: `Active` when set,
    /// `Terminated` otherwise. `OnLeave` is never produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus};
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
    /// assert_eq!(employee.employment_status(), EmploymentStatus::Active);
    /// ```
    pub fn employment_status(&self) -> EmploymentStatus {
        if self.is_active {
            EmploymentStatus::Active
        } else {
            EmploymentStatus::Terminated
        }
    }
}

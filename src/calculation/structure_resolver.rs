//! Salary structure resolution functionality.
//!
//! This module resolves the effective salary structure for an employee,
//! synthesizing a fallback when none has been configured.

use rust_decimal::Decimal;

use crate::models::{Employee, SalaryStructure};

/// The effective salary structure for an employee, tagged with its
/// provenance.
///
/// The fallback case is represented explicitly rather than as an
/// optional-field object patched at read time, so callers can see which
/// employees are running on defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStructure {
    /// The employee's explicitly configured structure, unchanged.
    Declared(SalaryStructure),
    /// A synthesized structure: `basic` from the employee's flat base
    /// salary (or zero), every other field zero/false.
    Fallback(SalaryStructure),
}

impl ResolvedStructure {
    /// Returns the underlying structure regardless of provenance.
    pub fn structure(&self) -> &SalaryStructure {
        match self {
            ResolvedStructure::Declared(s) | ResolvedStructure::Fallback(s) => s,
        }
    }

    /// Returns true when the structure was synthesized from defaults.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedStructure::Fallback(_))
    }
}

/// Resolves the effective salary structure for an employee.
///
/// If the employee has an explicit structure it is returned unchanged.
/// Otherwise a fallback is synthesized with `basic` taken from
/// `base_salary` (or zero) and all other fields zeroed. This resolver
/// never fails; a malformed roster entry still produces a (zero-value)
/// payroll record instead of excluding the employee from reports.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_structure;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Asha Rao".to_string(),
///     is_active: true,
///     department_id: None,
///     designation: String::new(),
///     salary_structure: None,
///     base_salary: Some(Decimal::from(18000)),
/// };
///
/// let resolved = resolve_structure(&employee);
/// assert!(resolved.is_fallback());
/// assert_eq!(resolved.structure().basic, Decimal::from(18000));
/// ```
pub fn resolve_structure(employee: &Employee) -> ResolvedStructure {
    match &employee.salary_structure {
        Some(structure) => ResolvedStructure::Declared(structure.clone()),
        None => {
            let mut fallback = SalaryStructure::zeroed();
            fallback.basic = employee.base_salary.unwrap_or(Decimal::ZERO);
            ResolvedStructure::Fallback(fallback)
        }
    }
}

//! Domain models for the Payroll Computation Core.
//!
//! Contains the input types (employees, salary structures, attendance
//! records, payroll periods) and the derived output types (payroll
//! records and summaries).

mod attendance;
mod employee;
mod payroll_period;
mod payroll_record;
mod salary_structure;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, EmploymentStatus};
pub use payroll_period::PayrollPeriod;
pub use payroll_record::{PayrollRecord, PayrollSummary};
pub use salary_structure::SalaryStructure;

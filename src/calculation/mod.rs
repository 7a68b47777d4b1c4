//! Calculation logic for the Payroll Computation Core.
//!
//! This module contains the pure computation pipeline: attendance
//! aggregation, salary structure resolution, earnings proration,
//! statutory deduction calculation, per-employee record building, and
//! organization-level aggregation. Every function here is deterministic
//! and free of side effects; each employee's record depends only on that
//! employee's own attendance slice and structure.

mod aggregator;
mod attendance;
mod deductions;
mod earnings;
mod record_builder;
mod structure_resolver;

pub use aggregator::summarize;
pub use attendance::aggregate_attendance;
pub use deductions::{DeductionBreakdown, calculate_deductions, pf_rate};
pub use earnings::{EarnedComponents, prorate_earnings, round_currency};
pub use record_builder::{build_payroll_record, compute_payroll};
pub use structure_resolver::{ResolvedStructure, resolve_structure};
